//! Order state and pricing
//!
//! An `Order` holds the selected model and up to [`MAX_OPTIONS`] distinct
//! catalog entries, referenced by catalog index in insertion order.
//!
//! # State Flow
//!
//! ```text
//! NoModel --select_model--> HasModel
//! HasModel --select_model--> HasModel   (options kept)
//! HasModel --reset--------> NoModel     (options cleared)
//! NoModel --add/remove----> NoModel     (no-op)
//! ```
//!
//! Add and remove report why nothing happened through [`OrderRejection`].
//! Callers facing the user treat every rejection as a silent no-op.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{normalize, Catalog};
use crate::types::{Model, ModelSelection};

/// Maximum number of options on one order
pub const MAX_OPTIONS: usize = 6;

/// Why an add or remove left the order unchanged
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRejection {
    #[error("No model selected")]
    NoModelSelected,

    #[error("Order already has the maximum number of options")]
    CapacityExceeded,

    #[error("Option already on the order")]
    AlreadySelected,

    #[error("No such option")]
    NotFound,
}

/// Macro-state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    NoModel,
    HasModel(Model),
}

/// One priced line of an order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub price: u32,
}

/// Snapshot of an order with prices resolved against a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub model: Option<Model>,
    pub base_price: u64,
    pub options: Vec<LineItem>,
    pub total: u64,
}

impl OrderSummary {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model {
            Some(model) => writeln!(f, "{:>8}  Model {}", self.base_price, model)?,
            None => writeln!(f, "{:>8}  No model selected", self.base_price)?,
        }
        for item in &self.options {
            writeln!(f, "{:>8}  {}", item.price, item.name)?;
        }
        write!(f, "{:>8}  Total", self.total)
    }
}

/// The in-progress order for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    model: ModelSelection,
    selected: Vec<usize>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            model: ModelSelection::Unselected,
            selected: Vec::with_capacity(MAX_OPTIONS),
        }
    }

    #[inline]
    pub fn model(&self) -> ModelSelection {
        self.model
    }

    pub fn state(&self) -> OrderState {
        match self.model {
            ModelSelection::Unselected => OrderState::NoModel,
            ModelSelection::Selected(model) => OrderState::HasModel(model),
        }
    }

    /// Selected catalog indices, first-added first
    #[inline]
    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_OPTIONS
    }

    /// Set or replace the model. Selected options are kept.
    pub fn select_model(&mut self, model: Model) {
        debug!("Model {} -> {}", self.model, model);
        self.model = ModelSelection::Selected(model);
    }

    /// Add the option named `query` (any case) to the end of the order.
    ///
    /// Checks run in a fixed order: model, capacity, duplicate, catalog
    /// lookup. A full order is rejected before the catalog is searched.
    /// Returns the catalog index that was added.
    pub fn add_option(&mut self, catalog: &Catalog, query: &str) -> Result<usize, OrderRejection> {
        let result = self.try_add(catalog, &normalize(query));
        match result {
            Ok(index) => debug!("Added option {:?} (catalog #{})", catalog[index].name(), index),
            Err(reason) => debug!("Add {:?} rejected: {}", query, reason),
        }
        result
    }

    fn try_add(&mut self, catalog: &Catalog, normalized: &str) -> Result<usize, OrderRejection> {
        if !self.model.is_selected() {
            return Err(OrderRejection::NoModelSelected);
        }
        if self.is_full() {
            return Err(OrderRejection::CapacityExceeded);
        }
        if self.position_of(catalog, normalized).is_some() {
            return Err(OrderRejection::AlreadySelected);
        }
        let index = catalog.find(normalized).ok_or(OrderRejection::NotFound)?;
        self.selected.push(index);
        Ok(index)
    }

    /// Remove the first selected option named `query` (any case).
    ///
    /// Later entries shift down and keep their relative order. No model
    /// check is made: with no model selected the list is empty, so the
    /// search finds nothing. Returns the catalog index that was removed.
    pub fn remove_option(
        &mut self,
        catalog: &Catalog,
        query: &str,
    ) -> Result<usize, OrderRejection> {
        match self.position_of(catalog, &normalize(query)) {
            Some(pos) => {
                let index = self.selected.remove(pos);
                debug!("Removed option {:?} (catalog #{})", catalog[index].name(), index);
                Ok(index)
            }
            None => {
                debug!("Remove {:?} rejected: not on the order", query);
                Err(OrderRejection::NotFound)
            }
        }
    }

    /// Position within the selection of the first entry matching `normalized`
    fn position_of(&self, catalog: &Catalog, normalized: &str) -> Option<usize> {
        self.selected
            .iter()
            .position(|&index| catalog[index].normalized_name() == normalized)
    }

    /// Clear the model and every selected option.
    pub fn reset(&mut self) {
        debug!("Order reset");
        self.model = ModelSelection::Unselected;
        self.selected.clear();
    }

    /// Base price of the model plus every selected option's price.
    pub fn total_price(&self, catalog: &Catalog) -> u64 {
        self.model.base_price()
            + self
                .selected
                .iter()
                .map(|&index| u64::from(catalog.price_of(index)))
                .sum::<u64>()
    }

    /// Display names of the selected options, in insertion order
    pub fn describe_selection<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        self.selected
            .iter()
            .map(|&index| catalog[index].name())
            .collect()
    }

    pub fn summary(&self, catalog: &Catalog) -> OrderSummary {
        let options = self
            .selected
            .iter()
            .map(|&index| LineItem {
                name: catalog[index].name().to_string(),
                price: catalog[index].price(),
            })
            .collect();

        OrderSummary {
            model: self.model.model(),
            base_price: self.model.base_price(),
            options,
            total: self.total_price(catalog),
        }
    }
}
