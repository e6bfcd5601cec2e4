//! The inventory: an ordered, named bag of items with an optional parent,
//! forming the lexical scope chain that gives `ProgramBlock` its closures.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ScuttleError;
use crate::item::{self, ItemHandle};

pub type InventoryHandle = Rc<RefCell<Inventory>>;

#[derive(Debug)]
pub struct Inventory {
    items: Vec<ItemHandle>,
    parent: Option<InventoryHandle>,
}

/// What a name resolved to: an ordinary item, or the literal inventory
/// itself (the special case that makes `look at inventory` work).
#[derive(Clone)]
pub enum Resolved {
    Item(ItemHandle),
    CurrentInventory(InventoryHandle),
}

impl Resolved {
    #[must_use]
    pub fn as_item(&self) -> Option<&ItemHandle> {
        match self {
            Self::Item(item) => Some(item),
            Self::CurrentInventory(_) => None,
        }
    }
}

/// Creates a new, unparented inventory from the given items.
#[must_use]
pub fn new(items: Vec<ItemHandle>, parent: Option<InventoryHandle>) -> InventoryHandle {
    Rc::new(RefCell::new(Inventory { items, parent }))
}

/// Appends an item to the end of the inventory.
pub fn append(inventory: &InventoryHandle, item: ItemHandle) {
    inventory.borrow_mut().items.push(item);
}

/// Removes an item by identity (not by name). A no-op if the item isn't
/// present in this exact inventory.
pub fn remove(inventory: &InventoryHandle, item: &ItemHandle) {
    inventory
        .borrow_mut()
        .items
        .retain(|candidate| !item::same_item(candidate, item));
}

/// Resolves a name against this inventory, then its parent chain.
///
/// # Errors
/// Returns [`ScuttleError::Lookup`] if the name isn't found anywhere in the
/// chain.
pub fn lookup(inventory: &InventoryHandle, name: &str) -> Result<Resolved, ScuttleError> {
    if name == "inventory" {
        return Ok(Resolved::CurrentInventory(Rc::clone(inventory)));
    }

    let found = inventory
        .borrow()
        .items
        .iter()
        .find(|candidate| item::name(candidate) == name)
        .cloned();
    if let Some(item) = found {
        return Ok(Resolved::Item(item));
    }

    let parent = inventory.borrow().parent.clone();
    match parent {
        Some(parent) => lookup(&parent, name),
        None => Err(ScuttleError::lookup(name)),
    }
}

/// Creates a new empty inventory whose parent is the receiver.
#[must_use]
pub fn create_child(inventory: &InventoryHandle) -> InventoryHandle {
    new(Vec::new(), Some(Rc::clone(inventory)))
}

/// Renders `"I'm carrying X, Y, Z."` for the `look at inventory` verb.
#[must_use]
pub fn describe(inventory: &InventoryHandle) -> String {
    let descriptions: Vec<String> = inventory
        .borrow()
        .items
        .iter()
        .map(item::description)
        .collect();
    format!("I'm carrying {}.", descriptions.join(", "))
}

/// Builds the starting scene: a child inventory holding one pieces o'
/// eight and one bottles o' grog, parented to a scene inventory holding
/// the stateless/tool items.
#[must_use]
pub fn default_inventory() -> InventoryHandle {
    let scene = new(
        vec![
            item::chromatic_triplicator(),
            item::duplicating_contraption(),
            item::scales(),
            item::dishonest_shopkeeper(),
            item::n_licator_creator(),
            item::root_beer(),
            item::vending_machine(),
        ],
        None,
    );

    new(
        vec![item::pieces_o_eight(1), item::bottles_o_grog(1)],
        Some(scene),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_item_by_name() {
        let inv = new(vec![item::pieces_o_eight(3)], None);
        let resolved = lookup(&inv, "pieces o' eight").unwrap();
        assert!(resolved.as_item().is_some());
    }

    #[test]
    fn lookup_recurses_to_parent() {
        let parent = new(vec![item::scales()], None);
        let child = create_child(&parent);
        let resolved = lookup(&child, "scales").unwrap();
        assert!(resolved.as_item().is_some());
    }

    #[test]
    fn nearest_inventory_wins_over_parent() {
        let parent = new(vec![item::pieces_o_eight(1)], None);
        let child = create_child(&parent);
        append(&child, item::pieces_o_eight(99));
        let resolved = lookup(&child, "pieces o' eight").unwrap();
        let Resolved::Item(found) = resolved else {
            panic!("expected an item")
        };
        assert_eq!(item::count_get(&found), Some(99));
    }

    #[test]
    fn missing_name_is_a_lookup_error() {
        let inv = new(Vec::new(), None);
        let err = lookup(&inv, "shovel").unwrap_err();
        assert_eq!(err.to_string(), "I can't see shovel here");
    }

    #[test]
    fn inventory_literal_resolves_regardless_of_contents() {
        let inv = new(Vec::new(), None);
        assert!(matches!(
            lookup(&inv, "inventory").unwrap(),
            Resolved::CurrentInventory(_)
        ));
    }

    #[test]
    fn remove_is_by_identity_not_name() {
        let a = item::pieces_o_eight(1);
        let b = item::pieces_o_eight(1);
        let inv = new(vec![Rc::clone(&a), Rc::clone(&b)], None);
        remove(&inv, &a);
        assert_eq!(inv.borrow().items.len(), 1);
        assert!(item::same_item(&inv.borrow().items[0], &b));
    }

    #[test]
    fn describe_joins_descriptions() {
        let inv = new(
            vec![item::pieces_o_eight(1), item::bottles_o_grog(2)],
            None,
        );
        assert_eq!(
            describe(&inv),
            "I'm carrying 1 pieces o' eight, 2 bottles o' grog."
        );
    }
}
