use super::record::{CityId, ClientId, RegionId, VacancyRecord};
use std::collections::HashMap;

/// Город внутри региона. На записи ссылается индексами в исходном
/// списке, а на регион — только по id (никаких перекрёстных ссылок).
#[derive(Debug, Clone, PartialEq)]
pub struct CityNode {
    pub id: CityId,
    /// "{placetitle} ({regionname})"
    pub name: String,
    pub region_id: RegionId,
    /// Организации города в порядке первого появления, без повторов
    pub client_ids: Vec<ClientId>,
    /// Индексы вакансий в исходном списке, в порядке поступления
    pub vacancy_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionNode {
    pub id: RegionId,
    pub name: String,
    /// Города региона в порядке первого появления, без повторов
    pub city_ids: Vec<CityId>,
}

/// Иерархия регион → город → организация, построенная за один проход
/// по плоскому списку вакансий. После постройки не меняется: новая
/// загрузка данных заменяет её целиком.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyHierarchy {
    regions: HashMap<RegionId, RegionNode>,
    cities: HashMap<CityId, CityNode>,
    clients: HashMap<ClientId, String>,
    /// Регионы и города в порядке первого появления — для списков
    /// доступных значений (порядок вставки, как у Map в источнике данных)
    region_order: Vec<RegionId>,
    city_order: Vec<CityId>,
    /// Сколько записей не попало в иерархию из-за отсутствия
    /// региона или города
    pub skipped_records: usize,
}

impl VacancyHierarchy {
    /// Один линейный проход, O(n) по числу записей, без сортировки.
    /// Записи без полного адреса (регион + город) пропускаются и
    /// только подсчитываются.
    pub fn build(records: &[VacancyRecord]) -> Self {
        let mut hierarchy = VacancyHierarchy::default();

        for (index, record) in records.iter().enumerate() {
            let (Some(region_id), Some(regionname), Some(place_id), Some(placetitle)) = (
                record.region_id,
                record.regionname.as_ref(),
                record.placeid,
                record.placetitle.as_ref(),
            ) else {
                hierarchy.skipped_records += 1;
                continue;
            };

            // Последнее виденное имя организации побеждает. Так делает
            // источник данных; при расхождении имён под одним id это
            // молча перезаписывает предыдущее.
            hierarchy
                .clients
                .insert(record.clientid, record.clientname.clone());

            match hierarchy.cities.get_mut(&place_id) {
                Some(city) => {
                    city.vacancy_indices.push(index);
                    if !city.client_ids.contains(&record.clientid) {
                        city.client_ids.push(record.clientid);
                    }
                }
                None => {
                    hierarchy.cities.insert(
                        place_id,
                        CityNode {
                            id: place_id,
                            name: format!("{} ({})", placetitle, regionname),
                            region_id,
                            client_ids: vec![record.clientid],
                            vacancy_indices: vec![index],
                        },
                    );
                    hierarchy.city_order.push(place_id);
                }
            }

            match hierarchy.regions.get_mut(&region_id) {
                Some(region) => {
                    if !region.city_ids.contains(&place_id) {
                        region.city_ids.push(place_id);
                    }
                }
                None => {
                    hierarchy.regions.insert(
                        region_id,
                        RegionNode {
                            id: region_id,
                            name: regionname.clone(),
                            city_ids: vec![place_id],
                        },
                    );
                    hierarchy.region_order.push(region_id);
                }
            }
        }

        hierarchy
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region(&self, id: RegionId) -> Option<&RegionNode> {
        self.regions.get(&id)
    }

    pub fn city(&self, id: CityId) -> Option<&CityNode> {
        self.cities.get(&id)
    }

    pub fn client_name(&self, id: ClientId) -> Option<&str> {
        self.clients.get(&id).map(String::as_str)
    }

    /// Регионы в порядке первого появления в данных.
    pub fn regions_in_order(&self) -> impl Iterator<Item = &RegionNode> {
        self.region_order.iter().map(|id| &self.regions[id])
    }

    /// Города в порядке первого появления в данных.
    pub fn cities_in_order(&self) -> impl Iterator<Item = &CityNode> {
        self.city_order.iter().map(|id| &self.cities[id])
    }

    /// Города региона в порядке их добавления в регион.
    pub fn cities_of_region<'a>(
        &'a self,
        region: &'a RegionNode,
    ) -> impl Iterator<Item = &'a CityNode> {
        region.city_ids.iter().map(|id| &self.cities[id])
    }

    /// Организации региона: объединение по его городам, без повторов,
    /// в порядке первого появления.
    pub fn clients_of_region(&self, region: &RegionNode) -> Vec<ClientId> {
        let mut client_ids = Vec::new();
        for city in self.cities_of_region(region) {
            for &client_id in &city.client_ids {
                if !client_ids.contains(&client_id) {
                    client_ids.push(client_id);
                }
            }
        }
        client_ids
    }

    /// Все организации иерархии, без повторов, в порядке обхода регионов.
    pub fn all_clients(&self) -> Vec<ClientId> {
        let mut client_ids = Vec::new();
        for region in self.regions_in_order() {
            for client_id in self.clients_of_region(region) {
                if !client_ids.contains(&client_id) {
                    client_ids.push(client_id);
                }
            }
        }
        client_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vacancy::record::test_fixtures::record;

    fn dataset() -> Vec<VacancyRecord> {
        vec![
            record(1, Some((1, "Тверская область")), Some((11, "Тверь")), (100, "Альфа")),
            record(2, Some((1, "Тверская область")), Some((11, "Тверь")), (200, "Бета")),
            record(3, Some((1, "Тверская область")), Some((12, "Ржев")), (200, "Бета")),
            record(4, Some((2, "Московская область")), Some((21, "Подольск")), (300, "Гамма")),
            // без города — в иерархию не попадает
            record(5, Some((1, "Тверская область")), None, (100, "Альфа")),
            // без региона — тоже мимо
            record(6, None, Some((13, "Кимры")), (100, "Альфа")),
        ]
    }

    #[test]
    fn test_skips_records_without_locality() {
        let records = dataset();
        let hierarchy = VacancyHierarchy::build(&records);

        assert_eq!(hierarchy.skipped_records, 2);
        assert!(hierarchy.city(13).is_none());

        // каждая оставшаяся запись попадает ровно в один город
        let mut seen = vec![0usize; records.len()];
        for city in hierarchy.cities_in_order() {
            for &idx in &city.vacancy_indices {
                seen[idx] += 1;
            }
        }
        assert_eq!(seen, vec![1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_referential_closure() {
        let records = dataset();
        let hierarchy = VacancyHierarchy::build(&records);

        for region in hierarchy.regions_in_order() {
            for &city_id in &region.city_ids {
                let city = hierarchy.city(city_id).expect("город из региона существует");
                assert_eq!(city.region_id, region.id);
            }
        }
        for city in hierarchy.cities_in_order() {
            assert!(hierarchy.region(city.region_id).is_some());
        }
    }

    #[test]
    fn test_city_name_and_insertion_order() {
        let records = dataset();
        let hierarchy = VacancyHierarchy::build(&records);

        let city = hierarchy.city(11).unwrap();
        assert_eq!(city.name, "Тверь (Тверская область)");
        assert_eq!(city.vacancy_indices, vec![0, 1]);
        assert_eq!(city.client_ids, vec![100, 200]);

        let region = hierarchy.region(1).unwrap();
        assert_eq!(region.city_ids, vec![11, 12]);

        let order: Vec<_> = hierarchy.regions_in_order().map(|r| r.id).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_client_directory_last_write_wins() {
        let mut records = dataset();
        records.push(record(
            7,
            Some((2, "Московская область")),
            Some((21, "Подольск")),
            (100, "Альфа-Групп"),
        ));
        let hierarchy = VacancyHierarchy::build(&records);
        assert_eq!(hierarchy.client_name(100), Some("Альфа-Групп"));
    }

    #[test]
    fn test_clients_of_region_union() {
        let records = dataset();
        let hierarchy = VacancyHierarchy::build(&records);
        let region = hierarchy.region(1).unwrap();
        assert_eq!(hierarchy.clients_of_region(region), vec![100, 200]);
        assert_eq!(hierarchy.all_clients(), vec![100, 200, 300]);
    }

    #[test]
    fn test_empty_input() {
        let hierarchy = VacancyHierarchy::build(&[]);
        assert!(hierarchy.is_empty());
        assert_eq!(hierarchy.skipped_records, 0);
        assert_eq!(hierarchy.all_clients(), Vec::<ClientId>::new());
    }
}
