mod apply_dialog;
mod card;
mod category_panel;
mod page;

pub use page::VacanciesPage;
