/// Постраничный срез упорядоченного списка.
///
/// Страницы нумеруются с нуля; человеческая нумерация с единицы — забота
/// отображения. Замена списка всегда возвращает на первую страницу, чтобы
/// после сужения фильтра не показать пустую страницу за концом списка.
/// Листание за границы — no-op, отрицательных и внедиапазонных страниц
/// не бывает.
#[derive(Debug, Clone, Default)]
pub struct Pager<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T> Pager<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            // нулевой размер страницы не имеет смысла
            page_size: page_size.max(1),
        }
    }

    /// Полная замена данных, текущая страница сбрасывается на первую.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 0;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn next_page(&mut self) {
        if self.can_next() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    /// Элементы текущей страницы: `items[page*size .. (page+1)*size)`.
    pub fn page_items(&self) -> &[T] {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        if start >= self.items.len() {
            &[]
        } else {
            &self.items[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(n: usize, page_size: usize) -> Pager<usize> {
        let mut pager = Pager::new(page_size);
        pager.replace_items((0..n).collect());
        pager
    }

    #[test]
    fn test_fourteen_items_by_six() {
        let mut pager = pager_with(14, 6);
        assert_eq!(pager.total_pages(), 3);

        assert_eq!(pager.page_items().len(), 6);
        assert!(pager.can_next());
        assert!(!pager.can_prev());

        pager.next_page();
        assert_eq!(pager.page_items().len(), 6);
        assert!(pager.can_next());
        assert!(pager.can_prev());

        pager.next_page();
        assert_eq!(pager.page_items(), &[12, 13]);
        assert!(!pager.can_next());
        assert!(pager.can_prev());
    }

    #[test]
    fn test_last_page_full_when_divisible() {
        let mut pager = pager_with(12, 6);
        assert_eq!(pager.total_pages(), 2);
        pager.next_page();
        assert_eq!(pager.page_items().len(), 6);
        assert!(!pager.can_next());
    }

    #[test]
    fn test_navigation_past_bounds_is_noop() {
        let mut pager = pager_with(3, 6);
        assert_eq!(pager.total_pages(), 1);

        pager.previous_page();
        assert_eq!(pager.page(), 0);
        pager.next_page();
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.page_items(), &[0, 1, 2]);
    }

    #[test]
    fn test_replace_resets_page() {
        let mut pager = pager_with(14, 6);
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.page(), 2);

        // сузившийся список не должен показать пустую страницу
        pager.replace_items((0..4).collect());
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.page_items(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_list() {
        let pager: Pager<usize> = Pager::new(6);
        assert_eq!(pager.total_pages(), 0);
        assert!(!pager.can_next());
        assert!(!pager.can_prev());
        assert!(pager.page_items().is_empty());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pager = Pager::<usize>::new(0);
        assert_eq!(pager.page_size(), 1);
    }
}
