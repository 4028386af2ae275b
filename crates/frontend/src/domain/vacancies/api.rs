use contracts::domain::vacancy::{parse_vacancy_list, VacancyRecord};
use wasm_bindgen::JsCast;

const VACANCIES_URL: &str = "https://gsr-rabota.ru/api/v2/GetAllVacancies";

/// Однократная загрузка полного списка вакансий.
pub async fn fetch_vacancies() -> Result<Vec<VacancyRecord>, String> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(VACANCIES_URL, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    // Структура ответа проверяется на границе; дальше ядро работает
    // только с типизированными записями
    parse_vacancy_list(&text).map_err(|e| e.to_string())
}
