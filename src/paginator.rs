use std::fmt::{Display, Formatter};

/// A page index outside 1..=page_count. Distinct from an empty page: the
/// render side turns this into a not-found, never into a blank listing.
#[derive(Debug, PartialEq)]
pub enum PageError {
    Zero,
    OutOfRange { requested: u32, page_count: u32 },
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::Zero => write!(f, "Page has to be greater than 0"),
            PageError::OutOfRange { requested, page_count } =>
                write!(f, "Page {} does not exist (page_count={})", requested, page_count),
        }
    }
}

impl std::error::Error for PageError {}

pub struct Paginator<'a, T> {
    post_list: &'a [T],
    page_size: u32,
    page_count: u32,
}

impl<'a, T> Paginator<'a, T> {
    pub fn from(post_list: &'a [T], page_size: u32) -> Self {
        if post_list.is_empty() {
            return Paginator {
                post_list,
                page_size,
                page_count: 0,
            };
        }
        let post_count = post_list.len() as u32;
        let upper_bound = post_count - 1;
        let page_count = (upper_bound / page_size) + 1;

        Paginator {
            post_list,
            page_size,
            page_count,
        }
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Pages are 1-based and contiguous; the last page may be short.
    pub fn get_page(&self, page: u32) -> Result<&'a [T], PageError> {
        match page {
            0 => return Err(PageError::Zero),
            x if x > self.page_count => return Err(PageError::OutOfRange {
                requested: page,
                page_count: self.page_count,
            }),
            _ => {}
        };

        let index = ((page - 1) * self.page_size) as usize;
        let mut end = (self.page_size as usize) + index;
        if end > self.post_list.len() {
            end = self.post_list.len();
        }
        Ok(&self.post_list[index..end])
    }

    /// All pages in order. Concatenated, they reproduce the input exactly.
    pub fn pages(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (1..=self.page_count).map(move |page| {
            let index = ((page - 1) * self.page_size) as usize;
            let end = ((self.page_size as usize) + index).min(self.post_list.len());
            &self.post_list[index..end]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_case() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];
        let paginator = Paginator::from(&items, 3);
        assert_eq!(paginator.page_count(), 5);
        assert_eq!(paginator.get_page(1), Ok([1, 2, 3].as_slice()));
        assert_eq!(paginator.get_page(2), Ok([4, 5, 6].as_slice()));
        assert_eq!(paginator.get_page(3), Ok([7, 8, 9].as_slice()));
        assert_eq!(paginator.get_page(4), Ok([10, 11, 12].as_slice()));
        assert_eq!(paginator.get_page(5), Ok([13].as_slice()));

        assert_eq!(paginator.get_page(0), Err(PageError::Zero));
        assert_eq!(paginator.get_page(6), Err(PageError::OutOfRange { requested: 6, page_count: 5 }));
    }

    #[test]
    fn test_out_of_range_is_not_an_empty_page() {
        let items = vec!["p1", "p2", "p3", "p4"];
        let paginator = Paginator::from(&items, 2);
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.get_page(1), Ok(["p1", "p2"].as_slice()));
        assert_eq!(paginator.get_page(2), Ok(["p3", "p4"].as_slice()));
        // Page 3 of 2 is an error, never []
        assert_eq!(paginator.get_page(3), Err(PageError::OutOfRange { requested: 3, page_count: 2 }));
    }

    #[test]
    fn test_pages_are_exhaustive_and_non_overlapping() {
        let items: Vec<u32> = (1..=13).collect();
        let paginator = Paginator::from(&items, 3);
        let rebuilt: Vec<u32> = paginator.pages().flatten().copied().collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_empty() {
        let items: Vec<u32> = vec![];
        let paginator = Paginator::from(&items, 3);
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(paginator.pages().count(), 0);
        assert_eq!(paginator.get_page(0), Err(PageError::Zero));
        assert_eq!(paginator.get_page(1), Err(PageError::OutOfRange { requested: 1, page_count: 0 }));
    }
}
