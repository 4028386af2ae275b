pub mod filter;
pub mod hierarchy;
pub mod record;

pub use filter::VacancyFilter;
pub use hierarchy::{CityNode, RegionNode, VacancyHierarchy};
pub use record::{parse_vacancy_list, EntityRef, VacancyRecord};
