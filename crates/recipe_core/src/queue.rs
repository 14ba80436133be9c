use crate::{Catalog, CatalogIndex, Msg};

/// Selection bound to one stub's fetch path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    pub url: String,
}

impl SelectCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn to_msg(&self) -> Msg {
        Msg::StubSelected {
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    /// Entry identity. Taken from the title, so duplicate titles collide.
    pub id: String,
    pub title: String,
    pub catalog_index: CatalogIndex,
    pub command: SelectCommand,
}

/// The currently displayed subset of the catalog.
///
/// Entries can only be created from catalog indices, so the queue is always a
/// subset of the catalog it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Queue {
    entries: Vec<QueueEntry>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the visible entries with the given catalog positions, in the order given.
    pub fn render<I>(&mut self, catalog: &Catalog, indices: I)
    where
        I: IntoIterator<Item = CatalogIndex>,
    {
        self.clear();
        for index in indices {
            self.add(catalog, index);
        }
    }

    pub fn render_all(&mut self, catalog: &Catalog) {
        self.render(catalog, catalog.indices());
    }

    /// Appends one entry; returns false if `index` is not in the catalog.
    pub fn add(&mut self, catalog: &Catalog, index: CatalogIndex) -> bool {
        let Some(stub) = catalog.get(index) else {
            return false;
        };
        self.entries.push(QueueEntry {
            id: stub.title.clone(),
            title: stub.title.clone(),
            catalog_index: index,
            command: SelectCommand::new(stub.url.clone()),
        });
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecipeStub;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            RecipeStub::new("Apple Pie", "/recipes/apple"),
            RecipeStub::new("Banana Bread", "/recipes/banana"),
        ])
    }

    #[test]
    fn add_rejects_index_outside_catalog() {
        let catalog = catalog();
        let mut queue = Queue::new();
        assert!(!queue.add(&catalog, 2));
        assert!(queue.is_empty());
    }

    #[test]
    fn entries_carry_title_id_and_bound_url() {
        let catalog = catalog();
        let mut queue = Queue::new();
        queue.render_all(&catalog);

        let second = &queue.entries()[1];
        assert_eq!(second.id, "Banana Bread");
        assert_eq!(second.catalog_index, 1);
        assert_eq!(
            second.command.to_msg(),
            Msg::StubSelected {
                url: "/recipes/banana".to_string()
            }
        );
    }
}
