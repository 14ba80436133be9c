use crate::RecipeStub;

/// Position of a stub inside the catalog; the identity the queue refers to.
pub type CatalogIndex = usize;

/// The full list of stubs loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    stubs: Vec<RecipeStub>,
}

impl Catalog {
    pub fn new(stubs: Vec<RecipeStub>) -> Self {
        Self { stubs }
    }

    pub fn stubs(&self) -> &[RecipeStub] {
        &self.stubs
    }

    pub fn get(&self, index: CatalogIndex) -> Option<&RecipeStub> {
        self.stubs.get(index)
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.stubs.iter().any(|stub| stub.url == url)
    }

    pub fn indices(&self) -> std::ops::Range<CatalogIndex> {
        0..self.stubs.len()
    }
}
