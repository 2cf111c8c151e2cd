use crate::Priced;
use pronto_catalog::{Menu, Money, Size, Topping};
use serde::{Deserialize, Serialize};

/// Layered pizza composition: a base order wrapped by one layer per accepted
/// topping. The topping set is closed, so layers are tagged variants rather
/// than open-ended trait objects; every layer answers the same price query
/// as the object it wraps, so chains compose to arbitrary depth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LayeredPizza {
    /// Terminal case: the unwrapped order. Price is the catalog base price
    /// for the size, captured at construction.
    Base { size: Size, base_price: Money },

    /// One accepted topping wrapping an inner composition. The increment is
    /// fixed at wrap time and the catalog is not consulted again.
    Topped {
        topping: Topping,
        increment: Money,
        inner: Box<LayeredPizza>,
    },
}

impl LayeredPizza {
    pub fn base(menu: &Menu, size: Size) -> Self {
        LayeredPizza::Base {
            size,
            base_price: menu.base_price(&size),
        }
    }

    /// Wrap this composition with one more topping layer.
    pub fn top(self, menu: &Menu, topping: Topping) -> Self {
        LayeredPizza::Topped {
            topping,
            increment: menu.topping_price(&topping),
            inner: Box::new(self),
        }
    }

    /// Inner price plus this layer's increment, down to the base case.
    pub fn price(&self) -> Money {
        match self {
            LayeredPizza::Base { base_price, .. } => *base_price,
            LayeredPizza::Topped {
                increment, inner, ..
            } => inner.price() + *increment,
        }
    }

    /// The size of the base order at the bottom of the chain.
    pub fn size(&self) -> Size {
        match self {
            LayeredPizza::Base { size, .. } => *size,
            LayeredPizza::Topped { inner, .. } => inner.size(),
        }
    }

    /// Topping tags from the outermost layer inward.
    pub fn layers(&self) -> Vec<Topping> {
        let mut layers = Vec::new();
        let mut current = self;
        while let LayeredPizza::Topped {
            topping, inner, ..
        } = current
        {
            layers.push(*topping);
            current = inner.as_ref();
        }
        layers
    }

    /// Number of topping layers above the base.
    pub fn depth(&self) -> usize {
        match self {
            LayeredPizza::Base { .. } => 0,
            LayeredPizza::Topped { inner, .. } => 1 + inner.depth(),
        }
    }
}

impl Priced for LayeredPizza {
    // Increments were captured when the layers were applied, so the menu is
    // not consulted again.
    fn total(&self, _menu: &Menu) -> Money {
        self.price()
    }
}
