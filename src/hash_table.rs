//! Static-hashing product table for the `inventory` drill.
//!
//! A fixed array of ten slots keyed by product code: modulo hash, linear
//! probing with wrap-around on collision, and no tombstones. Deleting a
//! product empties its slot outright, so probe chains stop at the first empty
//! slot exactly like the classic textbook exercise this models.

/// Number of slots in the table. Static hashing: the table never grows.
pub const TABLE_SIZE: usize = 10;

/// A product record. The code is the hash key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub code: u32,
    pub stock: u32,
    pub price: f32,
}

/// Where an insert ended up, or that it could not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Stored at `index`; `probed` is true when the home slot was taken and
    /// linear probing had to walk to a free one.
    Stored { index: usize, probed: bool },
    /// Every slot is occupied.
    Full,
}

/// Fixed-size open-addressing hash table of products.
#[derive(Debug, Default)]
pub struct ProductTable {
    slots: [Option<Product>; TABLE_SIZE],
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot a code hashes to before any probing.
    pub fn home_slot(code: u32) -> usize {
        code as usize % TABLE_SIZE
    }

    /// Insert a product at its home slot, probing linearly on collision.
    pub fn insert(&mut self, product: Product) -> InsertOutcome {
        let home = Self::home_slot(product.code);

        if self.slots[home].is_none() {
            self.slots[home] = Some(product);
            return InsertOutcome::Stored {
                index: home,
                probed: false,
            };
        }

        let mut i = (home + 1) % TABLE_SIZE;
        while i != home {
            if self.slots[i].is_none() {
                self.slots[i] = Some(product);
                return InsertOutcome::Stored {
                    index: i,
                    probed: true,
                };
            }
            i = (i + 1) % TABLE_SIZE;
        }

        InsertOutcome::Full
    }

    /// Walk the probe chain for `code`: from its home slot until the first
    /// empty slot or a full cycle.
    fn probe(&self, code: u32) -> Option<usize> {
        let home = Self::home_slot(code);
        let mut i = home;

        while let Some(product) = &self.slots[i] {
            if product.code == code {
                return Some(i);
            }
            i = (i + 1) % TABLE_SIZE;
            if i == home {
                break;
            }
        }

        None
    }

    /// Find a product by code.
    pub fn find(&self, code: u32) -> Option<(usize, &Product)> {
        let index = self.probe(code)?;
        self.slots[index].as_ref().map(|p| (index, p))
    }

    /// Delete a product by code, reporting the slot it occupied.
    pub fn remove(&mut self, code: u32) -> Option<usize> {
        let index = self.probe(code)?;
        self.slots[index] = None;
        Some(index)
    }

    /// Overwrite stock and price of an existing product. Returns false when
    /// the code is not in the table.
    pub fn update(&mut self, code: u32, stock: u32, price: f32) -> bool {
        match self.probe(code) {
            Some(index) => {
                if let Some(product) = &mut self.slots[index] {
                    product.stock = stock;
                    product.price = price;
                }
                true
            }
            None => false,
        }
    }

    /// Add `quantity` to an existing product's stock, reporting the new
    /// level. Stock saturates at `u32::MAX` rather than overflowing.
    pub fn restock(&mut self, code: u32, quantity: u32) -> Option<u32> {
        let index = self.probe(code)?;
        let product = self.slots[index].as_mut()?;
        product.stock = product.stock.saturating_add(quantity);
        Some(product.stock)
    }

    /// All slots in index order, for the display listing.
    pub fn slots(&self) -> &[Option<Product>] {
        &self.slots
    }
}
