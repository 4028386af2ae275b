use super::hierarchy::VacancyHierarchy;
use super::record::{ClientId, EntityRef, VacancyRecord};
use crate::shared::error::VacancyError;

/// Состояние фильтра вакансий: текущий выбор регион/город/организация,
/// списки доступных значений и видимый срез вакансий.
///
/// Всё производное состояние пересчитывается синхронно внутри самих
/// операций — никакого графа реактивных эффектов. После любой операции
/// выполняется инвариант: выбранный город принадлежит выбранному региону.
#[derive(Debug, Clone, Default)]
pub struct VacancyFilter {
    records: Vec<VacancyRecord>,
    hierarchy: Option<VacancyHierarchy>,

    current_region: Option<EntityRef>,
    current_city: Option<EntityRef>,
    current_client: Option<EntityRef>,

    available_regions: Vec<EntityRef>,
    available_cities: Vec<EntityRef>,
    available_clients: Vec<EntityRef>,

    /// Индексы видимых вакансий в `records`
    visible: Vec<usize>,
}

impl VacancyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Полная замена данных: иерархия перестраивается целиком, выбор
    /// сбрасывается (старые id после перезагрузки могут быть неактуальны).
    pub fn load(&mut self, records: Vec<VacancyRecord>) {
        self.records = records;
        self.hierarchy = Some(VacancyHierarchy::build(&self.records));
        self.current_region = None;
        self.current_city = None;
        self.current_client = None;
        self.restore_full_lists();
        self.recompute_visible();
    }

    pub fn is_loaded(&self) -> bool {
        self.hierarchy.is_some()
    }

    pub fn hierarchy(&self) -> Option<&VacancyHierarchy> {
        self.hierarchy.as_ref()
    }

    pub fn current_region(&self) -> Option<&EntityRef> {
        self.current_region.as_ref()
    }

    pub fn current_city(&self) -> Option<&EntityRef> {
        self.current_city.as_ref()
    }

    pub fn current_client(&self) -> Option<&EntityRef> {
        self.current_client.as_ref()
    }

    pub fn available_regions(&self) -> &[EntityRef] {
        &self.available_regions
    }

    pub fn available_cities(&self) -> &[EntityRef] {
        &self.available_cities
    }

    pub fn available_clients(&self) -> &[EntityRef] {
        &self.available_clients
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Видимый срез вакансий для отображения, до пагинации.
    pub fn visible_vacancies(&self) -> Vec<VacancyRecord> {
        self.visible
            .iter()
            .map(|&idx| self.records[idx].clone())
            .collect()
    }

    /// Выбор региона. `None` снимает фильтр региона и вместе с ним город.
    /// Неизвестный id — ошибка вызывающего кода, состояние не меняется.
    pub fn set_region(&mut self, region: Option<EntityRef>) -> Result<(), VacancyError> {
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            return Ok(());
        };

        match region {
            None => {
                self.current_region = None;
                self.current_city = None;
                self.restore_full_lists();
            }
            Some(region) => {
                if hierarchy.region(region.id).is_none() {
                    return Err(VacancyError::not_found("регион", region.id));
                }
                self.apply_region(region.id);
            }
        }

        self.recompute_visible();
        Ok(())
    }

    /// Выбор города. Регион-владелец выбирается автоматически, списки
    /// организаций сужаются до организаций самого города.
    pub fn set_city(&mut self, city: EntityRef) -> Result<(), VacancyError> {
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            return Ok(());
        };

        let Some(node) = hierarchy.city(city.id) else {
            return Err(VacancyError::not_found("город", city.id));
        };
        let (city_ref, region_id, client_ids) = (
            EntityRef::new(node.id, node.name.clone()),
            node.region_id,
            node.client_ids.clone(),
        );

        self.apply_region(region_id);
        self.current_city = Some(city_ref);
        self.available_clients = self.resolve_clients(&client_ids);
        self.recompute_visible();
        Ok(())
    }

    /// Фильтр по организации: без структурной проверки, повторный выбор
    /// той же организации (или `None`) снимает фильтр.
    pub fn set_client(&mut self, client: Option<EntityRef>) {
        if self.hierarchy.is_none() {
            return;
        }

        let same = match (&client, &self.current_client) {
            (Some(new), Some(cur)) => new.id == cur.id,
            _ => false,
        };
        self.current_client = if same { None } else { client };
        self.recompute_visible();
    }

    /// Сброс всех трёх фильтров и восстановление полных списков.
    pub fn reset(&mut self) -> Result<(), VacancyError> {
        if self.hierarchy.is_none() {
            return Err(VacancyError::NotLoaded);
        }

        self.current_region = None;
        self.current_city = None;
        self.current_client = None;
        self.restore_full_lists();
        self.recompute_visible();
        Ok(())
    }

    /// Установить регион и пересчитать списки городов и организаций.
    /// Город, не принадлежащий новому региону, снимается.
    fn apply_region(&mut self, region_id: i64) {
        let hierarchy = self.hierarchy.as_ref().expect("иерархия уже проверена");
        let region = hierarchy.region(region_id).expect("регион уже проверен");

        let region_ref = EntityRef::new(region.id, region.name.clone());
        let cities: Vec<EntityRef> = hierarchy
            .cities_of_region(region)
            .map(|city| EntityRef::new(city.id, city.name.clone()))
            .collect();
        let client_ids = hierarchy.clients_of_region(region);

        if let Some(city) = &self.current_city {
            if !region.city_ids.contains(&city.id) {
                self.current_city = None;
            }
        }

        self.current_region = Some(region_ref);
        self.available_cities = cities;
        self.available_clients = self.resolve_clients(&client_ids);
    }

    fn restore_full_lists(&mut self) {
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            self.available_regions.clear();
            self.available_cities.clear();
            self.available_clients.clear();
            return;
        };

        self.available_regions = hierarchy
            .regions_in_order()
            .map(|region| EntityRef::new(region.id, region.name.clone()))
            .collect();
        self.available_cities = hierarchy
            .cities_in_order()
            .map(|city| EntityRef::new(city.id, city.name.clone()))
            .collect();
        self.available_clients = self.resolve_clients(&hierarchy.all_clients());
    }

    fn resolve_clients(&self, client_ids: &[ClientId]) -> Vec<EntityRef> {
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            return Vec::new();
        };
        client_ids
            .iter()
            .filter_map(|&id| {
                hierarchy
                    .client_name(id)
                    .map(|name| EntityRef::new(id, name))
            })
            .collect()
    }

    /// Пересчёт видимого среза: город → его вакансии; иначе регион →
    /// вакансии его городов в порядке городов; иначе весь исходный
    /// список (включая записи без адреса). Затем фильтр по организации.
    fn recompute_visible(&mut self) {
        let Some(hierarchy) = self.hierarchy.as_ref() else {
            self.visible.clear();
            return;
        };

        let candidates: Vec<usize> = if let Some(city) =
            self.current_city.as_ref().and_then(|c| hierarchy.city(c.id))
        {
            city.vacancy_indices.clone()
        } else if let Some(region) = self
            .current_region
            .as_ref()
            .and_then(|r| hierarchy.region(r.id))
        {
            hierarchy
                .cities_of_region(region)
                .flat_map(|city| city.vacancy_indices.iter().copied())
                .collect()
        } else {
            (0..self.records.len()).collect()
        };

        self.visible = match &self.current_client {
            Some(client) => candidates
                .into_iter()
                .filter(|&idx| self.records[idx].clientid == client.id)
                .collect(),
            None => candidates,
        };
    }
}
