use thiserror::Error;

/// Ошибки ядра подбора вакансий.
///
/// `Validation` фатальна для всей загрузки данных: частично разобранный
/// список наружу не отдаётся. `NotFound` означает ошибку вызывающего кода
/// (id вне текущего справочника, например устаревший после перезагрузки
/// данных) — состояние при этом не меняется.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VacancyError {
    #[error("запись {index}: {message}")]
    Validation { index: usize, message: String },

    #[error("{kind} с id {id} отсутствует в справочнике")]
    NotFound { kind: &'static str, id: i64 },

    #[error("данные вакансий ещё не загружены")]
    NotLoaded,
}

impl VacancyError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}
