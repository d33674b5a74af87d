pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: u32,
    page_count: u32,
}

impl<'a, T> Paginator<'a, T> {
    pub fn from(items: &'a [T], page_size: u32) -> Self {
        let page_size = page_size.max(1);
        if items.is_empty() {
            return Paginator {
                items,
                page_size,
                page_count: 0,
            };
        }
        let item_count = items.len() as u32;
        let upper_bound = item_count - 1;
        let page_count = (upper_bound / page_size) + 1;

        Paginator {
            items,
            page_size,
            page_count,
        }
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn get_page(&self, page: u32) -> Result<&'a [T], String> {
        match page {
            0 => return Err("Page has to be greater than 0".to_string()),
            x if x > self.page_count => return Err(format!("Page has to be less than page_count ({})", self.page_count)),
            _ => {}
        };

        let items: &'a [T] = self.items;
        let start = ((page - 1) * self.page_size) as usize;
        let end = (start + self.page_size as usize).min(items.len());
        Ok(&items[start..end])
    }

    /// Every page with its 1-based number. An empty list still renders as one empty page.
    pub fn pages(&self) -> Vec<(u32, &'a [T])> {
        let items: &'a [T] = self.items;
        if self.page_count == 0 {
            return vec![(1, items)];
        }
        items.chunks(self.page_size as usize)
            .zip(1..)
            .map(|(chunk, number)| (number, chunk))
            .collect()
    }
}
