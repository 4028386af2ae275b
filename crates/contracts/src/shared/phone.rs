/// Прогрессивная маска номера телефона: `+7 (999) 999-99-99`.
///
/// Маска строится по цифрам, поэтому корректна и для частично
/// введённого номера.
pub fn format_phone_digits(digits: &str) -> String {
    let mut result = String::new();
    for (pos, ch) in digits.chars().enumerate() {
        match pos {
            0 => {
                result.push('+');
                result.push(ch);
                result.push(' ');
            }
            1 => {
                result.push('(');
                result.push(ch);
            }
            3 => {
                result.push(ch);
                result.push_str(") ");
            }
            6 | 8 => {
                result.push(ch);
                result.push('-');
            }
            _ => result.push(ch),
        }
    }
    result
}

/// Нормализация пользовательского ввода в поле телефона.
///
/// Лишние символы отбрасываются, ввод длиннее 11 цифр игнорируется
/// (возвращается прежнее значение). Удаление символа маски (скобки,
/// дефиса, пробела) удаляет и стоящую перед ним цифру — иначе маска
/// тут же вернула бы символ на место.
pub fn normalize_phone_input(value: &str, previous: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.chars().count() > 11 {
        return previous.to_string();
    }

    let deleted_mask_char = previous.chars().count() > value.chars().count()
        && previous
            .chars()
            .last()
            .map(|c| !c.is_ascii_digit())
            .unwrap_or(false);

    if deleted_mask_char {
        let shortened: String = {
            let count = digits.chars().count();
            digits.chars().take(count.saturating_sub(1)).collect()
        };
        return format_phone_digits(&shortened);
    }

    format_phone_digits(&digits)
}
