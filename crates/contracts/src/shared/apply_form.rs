use std::collections::HashMap;

/// Маскированный номер целиком: "+7 (999) 999-99-99"
const PHONE_MASK_LEN: usize = 18;

pub const MSG_REQUIRED: &str = "Поле не должно быть пустым";
pub const MSG_PHONE_FORMAT: &str = "Номер должен быть в формате: +7 (999) 999-99-99";

/// Форма отклика на вакансию.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyForm {
    pub last_name: String,
    pub first_name: String,
    /// Отчество — необязательное
    pub parent_name: String,
    /// Телефон в маскированном виде
    pub phone_number: String,
}

impl ApplyForm {
    /// Проверка полей. Возвращает ошибки по именам полей — форма
    /// подсвечивает каждое поле своим сообщением.
    pub fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();

        if self.last_name.trim().is_empty() {
            errors.insert("last_name", MSG_REQUIRED.to_string());
        }
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", MSG_REQUIRED.to_string());
        }
        if self.phone_number.is_empty() {
            errors.insert("phone_number", MSG_REQUIRED.to_string());
        } else if self.phone_number.chars().count() != PHONE_MASK_LEN {
            errors.insert("phone_number", MSG_PHONE_FORMAT.to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ApplyForm {
        ApplyForm {
            last_name: "Иванов".to_string(),
            first_name: "Иван".to_string(),
            parent_name: String::new(),
            phone_number: "+7 (999) 123-45-67".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn test_parent_name_is_optional() {
        let mut form = filled_form();
        form.parent_name = String::new();
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_required_fields() {
        let form = ApplyForm::default();
        let errors = form.validate();
        assert_eq!(errors.get("last_name").map(String::as_str), Some(MSG_REQUIRED));
        assert_eq!(errors.get("first_name").map(String::as_str), Some(MSG_REQUIRED));
        assert_eq!(errors.get("phone_number").map(String::as_str), Some(MSG_REQUIRED));
        assert!(!errors.contains_key("parent_name"));
    }

    #[test]
    fn test_incomplete_phone() {
        let mut form = filled_form();
        form.phone_number = "+7 (999) 123".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.get("phone_number").map(String::as_str),
            Some(MSG_PHONE_FORMAT)
        );
    }
}
