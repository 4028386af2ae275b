use crate::shared::error::VacancyError;
use serde::{Deserialize, Serialize};

pub type VacancyId = i64;
pub type RegionId = i64;
pub type CityId = i64;
pub type ClientId = i64;

/// Пара id/название — выбранное значение фильтра и опция селекта.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Зарплатные поля приходят то строкой, то числом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryValue {
    Number(f64),
    Text(String),
}

impl SalaryValue {
    pub fn display(&self) -> String {
        match self {
            // Целые значения без ".0", как их отдаёт сервер
            SalaryValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            SalaryValue::Number(n) => format!("{}", n),
            SalaryValue::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SalaryValue::Number(_) => false,
            SalaryValue::Text(s) => s.trim().is_empty(),
        }
    }
}

/// Вакансия в том виде, в каком её отдаёт GetAllVacancies.
///
/// Записи без региона или города (`region_id`/`regionname`/`placeid`/
/// `placetitle` = null) валидны, но в иерархию фильтров не попадают.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub vacancy_id: VacancyId,
    pub vacplacement_id: i64,
    pub profid: i64,
    pub proftitle: String,
    pub placeid: Option<CityId>,
    pub placetitle: Option<String>,
    pub salary_volume: SalaryValue,
    pub salary_type: i64,
    pub directionid: i64,
    pub directiontitle: String,
    pub stafftype: i64,
    pub vdescription: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: i64,
    pub salary_volume_ex: String,
    pub clientid: ClientId,
    pub clientname: String,
    pub flghot: Option<i64>,
    pub region_id: Option<RegionId>,
    pub search_desc: String,
    pub search_geo: String,
    pub regionname: Option<String>,
    pub stationname: Option<String>,
    pub numentries: Option<String>,
    pub numgeoentries: Option<String>,
    pub baseindex: i64,
    pub flgstemmer: i64,
    pub salary_type_title: String,
    pub salary_hour: Option<SalaryValue>,
    pub salary_day: Option<SalaryValue>,
    pub salary_week: Option<SalaryValue>,
    pub salary_month: Option<SalaryValue>,
    pub websitevacancynum: Option<String>,
}

impl VacancyRecord {
    /// Месячная зарплата приоритетна; иначе готовая строка с сервера.
    pub fn known_salary(&self) -> String {
        match &self.salary_month {
            Some(salary) if !salary.is_empty() => format!("{} р./мес.", salary.display()),
            _ => self.salary_volume_ex.clone(),
        }
    }

    /// Запись пригодна для иерархии регион → город → организация.
    pub fn has_locality(&self) -> bool {
        self.region_id.is_some()
            && self.regionname.is_some()
            && self.placeid.is_some()
            && self.placetitle.is_some()
    }
}

/// Разбор ответа GetAllVacancies с проверкой структуры на границе.
///
/// Разбор поэлементный: при несовпадении типов ошибка называет номер
/// записи и поле из сообщения serde. Частичный результат не возвращается.
pub fn parse_vacancy_list(body: &str) -> Result<Vec<VacancyRecord>, VacancyError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| VacancyError::Validation {
            index: 0,
            message: format!("ожидался массив вакансий: {e}"),
        })?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let record: VacancyRecord =
            serde_json::from_value(value).map_err(|e| VacancyError::Validation {
                index,
                message: e.to_string(),
            })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// Минимально заполненная запись для тестов иерархии и фильтра.
    pub fn record(
        vacancy_id: i64,
        region: Option<(RegionId, &str)>,
        city: Option<(CityId, &str)>,
        client: (ClientId, &str),
    ) -> VacancyRecord {
        VacancyRecord {
            vacancy_id,
            vacplacement_id: vacancy_id * 10,
            profid: 1,
            proftitle: format!("Вакансия {vacancy_id}"),
            placeid: city.map(|(id, _)| id),
            placetitle: city.map(|(_, name)| name.to_string()),
            salary_volume: SalaryValue::Number(50000.0),
            salary_type: 1,
            directionid: 1,
            directiontitle: "Производство".to_string(),
            stafftype: 1,
            vdescription: String::new(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            is_active: 1,
            salary_volume_ex: "от 50 000 р.".to_string(),
            clientid: client.0,
            clientname: client.1.to_string(),
            flghot: None,
            region_id: region.map(|(id, _)| id),
            search_desc: String::new(),
            search_geo: String::new(),
            regionname: region.map(|(_, name)| name.to_string()),
            stationname: None,
            numentries: None,
            numgeoentries: None,
            baseindex: 0,
            flgstemmer: 0,
            salary_type_title: String::new(),
            salary_hour: None,
            salary_day: None,
            salary_week: None,
            salary_month: None,
            websitevacancynum: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_salary_prefers_month() {
        let mut rec = test_fixtures::record(1, Some((1, "Тверская область")), Some((10, "Тверь")), (5, "ООО Ромашка"));
        rec.salary_month = Some(SalaryValue::Number(64000.0));
        assert_eq!(rec.known_salary(), "64000 р./мес.");

        rec.salary_month = Some(SalaryValue::Text(String::new()));
        assert_eq!(rec.known_salary(), "от 50 000 р.");

        rec.salary_month = None;
        assert_eq!(rec.known_salary(), "от 50 000 р.");
    }

    #[test]
    fn test_parse_accepts_string_and_number_salaries() {
        let body = serde_json::to_string(&vec![
            serde_json::json!({
                "vacancy_id": 1, "vacplacement_id": 10, "profid": 1,
                "proftitle": "Комплектовщик", "placeid": 7, "placetitle": "Тверь",
                "salary_volume": "45000", "salary_type": 1,
                "directionid": 1, "directiontitle": "Склад", "stafftype": 1,
                "vdescription": "", "address": "", "latitude": 56.8, "longitude": 35.9,
                "is_active": 1, "salary_volume_ex": "от 45 000 р.",
                "clientid": 3, "clientname": "ООО Ромашка", "flghot": null,
                "region_id": 69, "search_desc": "", "search_geo": "",
                "regionname": "Тверская область", "stationname": null,
                "numentries": null, "numgeoentries": null, "baseindex": 0,
                "flgstemmer": 0, "salary_type_title": "в месяц",
                "salary_hour": "250", "salary_day": 2000, "salary_week": null,
                "salary_month": 45000, "websitevacancynum": null
            }),
        ])
        .unwrap();

        let records = parse_vacancy_list(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].salary_volume, SalaryValue::Text("45000".to_string()));
        assert_eq!(records[0].salary_month, Some(SalaryValue::Number(45000.0)));
        assert!(records[0].has_locality());
    }

    #[test]
    fn test_parse_reports_offending_record() {
        let good = serde_json::to_value(test_fixtures::record(
            1,
            Some((69, "Тверская область")),
            Some((7, "Тверь")),
            (3, "ООО Ромашка"),
        ))
        .unwrap();
        let mut bad = good.clone();
        // Вторая запись сломана: vacancy_id приходит строкой
        bad["vacancy_id"] = serde_json::json!("oops");

        let body = serde_json::to_string(&vec![good, bad]).unwrap();
        let err = parse_vacancy_list(&body).unwrap_err();
        match err {
            VacancyError::Validation { index, message } => {
                assert_eq!(index, 1);
                assert!(!message.is_empty());
            }
            other => panic!("неожиданная ошибка: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_vacancy_list("{}"),
            Err(VacancyError::Validation { .. })
        ));
    }
}
