//! The item model: a closed tagged union of every value kind the interpreter
//! manipulates, plus the small set of capability queries ([`coin_value`],
//! [`count_get`]/[`count_set`], [`truthy_get`]/[`truthy_set`]) that replace
//! the source language's attribute probing (`hasattr`) with an explicit
//! `match`. Items are shared via [`ItemHandle`] (a reference-counted cell)
//! so that wrappers can alias an underlying item and a block's closure can
//! outlive the scope that created it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::block::ProgramBlock;

/// A shared, mutable handle to an item. Cloning an `ItemHandle` aliases the
/// same underlying item rather than copying it — see [`copy_item`] for the
/// (rare) operation that actually duplicates state.
pub type ItemHandle = Rc<RefCell<Item>>;

#[derive(Debug)]
pub struct Item {
    pub kind: ItemKind,
}

#[derive(Debug, Clone)]
pub enum ItemKind {
    PiecesOEight { count: i64 },
    BottlesOGrog { count: i64 },
    ChromaticTriplicator,
    DuplicatingContraption,
    Scales { truthy: bool },
    DishonestShopkeeper,
    NLicatorCreator,
    MultiplyingContraption { factor: i64 },
    RootBeer,
    VendingMachine,
    Shovel,
    ProgramBlock(ProgramBlock),
    ColorWrapper { wrapped: ItemHandle, color: String },
    AliasingWrapper { wrapped: ItemHandle, name: String },
}

fn handle(kind: ItemKind) -> ItemHandle {
    Rc::new(RefCell::new(Item { kind }))
}

pub fn pieces_o_eight(count: i64) -> ItemHandle {
    handle(ItemKind::PiecesOEight { count })
}

pub fn bottles_o_grog(count: i64) -> ItemHandle {
    handle(ItemKind::BottlesOGrog { count })
}

pub fn chromatic_triplicator() -> ItemHandle {
    handle(ItemKind::ChromaticTriplicator)
}

pub fn duplicating_contraption() -> ItemHandle {
    handle(ItemKind::DuplicatingContraption)
}

pub fn scales() -> ItemHandle {
    handle(ItemKind::Scales { truthy: false })
}

pub fn dishonest_shopkeeper() -> ItemHandle {
    handle(ItemKind::DishonestShopkeeper)
}

pub fn n_licator_creator() -> ItemHandle {
    handle(ItemKind::NLicatorCreator)
}

pub fn multiplying_contraption(factor: i64) -> ItemHandle {
    handle(ItemKind::MultiplyingContraption { factor })
}

pub fn root_beer() -> ItemHandle {
    handle(ItemKind::RootBeer)
}

pub fn vending_machine() -> ItemHandle {
    handle(ItemKind::VendingMachine)
}

pub fn shovel() -> ItemHandle {
    handle(ItemKind::Shovel)
}

pub fn program_block(block: ProgramBlock) -> ItemHandle {
    handle(ItemKind::ProgramBlock(block))
}

pub fn color_wrapper(wrapped: ItemHandle, color: impl Into<String>) -> ItemHandle {
    handle(ItemKind::ColorWrapper {
        wrapped,
        color: color.into(),
    })
}

pub fn aliasing_wrapper(wrapped: ItemHandle, name: impl Into<String>) -> ItemHandle {
    handle(ItemKind::AliasingWrapper {
        wrapped,
        name: name.into(),
    })
}

/// The item's name, as it would be typed on a command line.
#[must_use]
pub fn name(item: &ItemHandle) -> String {
    match &item.borrow().kind {
        ItemKind::PiecesOEight { .. } => "pieces o' eight".to_owned(),
        ItemKind::BottlesOGrog { .. } => "bottles o' grog".to_owned(),
        ItemKind::ChromaticTriplicator => "chromatic triplicator".to_owned(),
        ItemKind::DuplicatingContraption => "duplicating contraption".to_owned(),
        ItemKind::Scales { .. } => "scales".to_owned(),
        ItemKind::DishonestShopkeeper => "dishonest shopkeeper".to_owned(),
        ItemKind::NLicatorCreator => "n-licator creator".to_owned(),
        ItemKind::MultiplyingContraption { .. } => "n-licator".to_owned(),
        ItemKind::RootBeer => "root beer".to_owned(),
        ItemKind::VendingMachine => "vending machine".to_owned(),
        ItemKind::Shovel => "shovel".to_owned(),
        ItemKind::ProgramBlock(block) => block.name.clone(),
        ItemKind::ColorWrapper { wrapped, color } => format!("{color} {}", name(wrapped)),
        ItemKind::AliasingWrapper { name: alias, .. } => alias.clone(),
    }
}

/// The item's rendering for `look at` and for `Inventory::describe`.
#[must_use]
pub fn description(item: &ItemHandle) -> String {
    let with_quantity = {
        match &item.borrow().kind {
            ItemKind::PiecesOEight { count } => Some(format!("{count} pieces o' eight")),
            ItemKind::BottlesOGrog { count } => Some(format!("{count} bottles o' grog")),
            ItemKind::ColorWrapper { wrapped, color } => {
                Some(format!("{color} {}", description(wrapped)))
            }
            ItemKind::AliasingWrapper { wrapped, name: alias } => {
                Some(format!("{alias} which appears to be {}", description(wrapped)))
            }
            _ => None,
        }
    };
    with_quantity.unwrap_or_else(|| name(item))
}

/// Signed coin contribution: `+count` for pieces o' eight, `-count` for
/// bottles o' grog, forwarded through wrappers, absent everywhere else.
#[must_use]
pub fn coin_value(item: &ItemHandle) -> Option<i64> {
    match &item.borrow().kind {
        ItemKind::PiecesOEight { count } => Some(*count),
        ItemKind::BottlesOGrog { count } => Some(-*count),
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            coin_value(wrapped)
        }
        _ => None,
    }
}

/// The item's mutable count, forwarded through wrappers. `None` if the item
/// (after unwrapping) has no count.
#[must_use]
pub fn count_get(item: &ItemHandle) -> Option<i64> {
    match &item.borrow().kind {
        ItemKind::PiecesOEight { count } | ItemKind::BottlesOGrog { count } => Some(*count),
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            count_get(wrapped)
        }
        _ => None,
    }
}

/// Sets the item's count, forwarded through wrappers. Returns `false` if the
/// item has no count to set.
pub fn count_set(item: &ItemHandle, value: i64) -> bool {
    match &mut item.borrow_mut().kind {
        ItemKind::PiecesOEight { count } | ItemKind::BottlesOGrog { count } => {
            *count = value;
            true
        }
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            count_set(wrapped, value)
        }
        _ => false,
    }
}

/// The scales' truthy flag. Not forwarded through wrappers — only a bare
/// `Scales` ever carries one.
#[must_use]
pub fn truthy_get(item: &ItemHandle) -> Option<bool> {
    match &item.borrow().kind {
        ItemKind::Scales { truthy } => Some(*truthy),
        _ => None,
    }
}

pub fn truthy_set(item: &ItemHandle, value: bool) -> bool {
    match &mut item.borrow_mut().kind {
        ItemKind::Scales { truthy } => {
            *truthy = value;
            true
        }
        _ => false,
    }
}

#[must_use]
pub fn is_wrapper(item: &ItemHandle) -> bool {
    matches!(
        item.borrow().kind,
        ItemKind::ColorWrapper { .. } | ItemKind::AliasingWrapper { .. }
    )
}

/// `true` only for `ColorWrapper` — root beer strips a color layer
/// specifically, not an alias.
#[must_use]
pub fn is_color_wrapper(item: &ItemHandle) -> bool {
    matches!(item.borrow().kind, ItemKind::ColorWrapper { .. })
}

/// The directly wrapped item, one layer down, or `None` for a non-wrapper.
#[must_use]
pub fn wrapped_of(item: &ItemHandle) -> Option<ItemHandle> {
    match &item.borrow().kind {
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            Some(Rc::clone(wrapped))
        }
        _ => None,
    }
}

/// Peels every wrapper layer, returning the innermost non-wrapper item
/// (still shared with whatever else holds it).
#[must_use]
pub fn unwrap(item: &ItemHandle) -> ItemHandle {
    match wrapped_of(item) {
        Some(inner) => unwrap(&inner),
        None => Rc::clone(item),
    }
}

/// Deep-copies an item into a brand new, independent handle. Wrapper
/// structure (color, alias name) is preserved; counts and flags are copied
/// by value, so the copy shares no state with the original.
#[must_use]
pub fn copy_item(item: &ItemHandle) -> ItemHandle {
    let copied_kind = match &item.borrow().kind {
        ItemKind::PiecesOEight { count } => ItemKind::PiecesOEight { count: *count },
        ItemKind::BottlesOGrog { count } => ItemKind::BottlesOGrog { count: *count },
        ItemKind::ChromaticTriplicator => ItemKind::ChromaticTriplicator,
        ItemKind::DuplicatingContraption => ItemKind::DuplicatingContraption,
        ItemKind::Scales { truthy } => ItemKind::Scales { truthy: *truthy },
        ItemKind::DishonestShopkeeper => ItemKind::DishonestShopkeeper,
        ItemKind::NLicatorCreator => ItemKind::NLicatorCreator,
        ItemKind::MultiplyingContraption { factor } => {
            ItemKind::MultiplyingContraption { factor: *factor }
        }
        ItemKind::RootBeer => ItemKind::RootBeer,
        ItemKind::VendingMachine => ItemKind::VendingMachine,
        ItemKind::Shovel => ItemKind::Shovel,
        ItemKind::ProgramBlock(block) => ItemKind::ProgramBlock(block.clone()),
        ItemKind::ColorWrapper { wrapped, color } => ItemKind::ColorWrapper {
            wrapped: copy_item(wrapped),
            color: color.clone(),
        },
        ItemKind::AliasingWrapper { wrapped, name: alias } => ItemKind::AliasingWrapper {
            wrapped: copy_item(wrapped),
            name: alias.clone(),
        },
    };
    handle(copied_kind)
}

/// Retargets the innermost wrapper layer of `item` to `replacement`,
/// preserving every color/alias layer above it. Panics if `item` is not a
/// wrapper — callers must check [`is_wrapper`] first.
pub fn replace(item: &ItemHandle, replacement: ItemHandle) {
    let deeper = match &item.borrow().kind {
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            if is_wrapper(wrapped) {
                Some(Rc::clone(wrapped))
            } else {
                None
            }
        }
        _ => unreachable!("replace() called on a non-wrapper item"),
    };

    match deeper {
        Some(inner) => replace(&inner, replacement),
        None => match &mut item.borrow_mut().kind {
            ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
                *wrapped = replacement;
            }
            _ => unreachable!("checked above"),
        },
    }
}

/// `true` for items with a mutable identity that can be looked up by name
/// and aliased — used by `Inventory::lookup`'s special case for `inventory`.
#[must_use]
pub fn same_item(a: &ItemHandle, b: &ItemHandle) -> bool {
    Rc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_value_signs() {
        assert_eq!(coin_value(&pieces_o_eight(5)), Some(5));
        assert_eq!(coin_value(&bottles_o_grog(5)), Some(-5));
        assert_eq!(coin_value(&scales()), None);
    }

    #[test]
    fn color_wrapper_forwards_capabilities() {
        let wrapped = color_wrapper(pieces_o_eight(3), "green");
        assert_eq!(name(&wrapped), "green pieces o' eight");
        assert_eq!(description(&wrapped), "green 3 pieces o' eight");
        assert_eq!(coin_value(&wrapped), Some(3));
        assert_eq!(count_get(&wrapped), Some(3));
        assert!(count_set(&wrapped, 9));
        assert_eq!(count_get(&wrapped), Some(9));
    }

    #[test]
    fn aliasing_wrapper_description() {
        let wrapped = aliasing_wrapper(pieces_o_eight(2), "mysterious object");
        assert_eq!(
            description(&wrapped),
            "mysterious object which appears to be 2 pieces o' eight"
        );
    }

    #[test]
    fn copy_item_is_independent() {
        let original = pieces_o_eight(4);
        let copy = copy_item(&original);
        assert!(count_set(&original, 100));
        assert_eq!(count_get(&copy), Some(4));
    }

    #[test]
    fn copy_preserves_wrapper_structure() {
        let wrapped = color_wrapper(pieces_o_eight(1), "red");
        let copy = copy_item(&wrapped);
        assert!(is_wrapper(&copy));
        assert_eq!(name(&copy), "red pieces o' eight");
        assert!(count_set(&wrapped, 50));
        assert_eq!(count_get(&copy), Some(1));
    }

    #[test]
    fn unwrap_peels_nested_wrappers() {
        let inner = pieces_o_eight(7);
        let wrapped = color_wrapper(color_wrapper(Rc::clone(&inner), "red"), "blue");
        assert!(same_item(&unwrap(&wrapped), &inner));
    }

    #[test]
    fn replace_retargets_innermost_layer_keeping_outer_wrapper() {
        let alias = aliasing_wrapper(pieces_o_eight(1), "mysterious object");
        let replacement = pieces_o_eight(42);
        replace(&alias, Rc::clone(&replacement));
        assert_eq!(count_get(&alias), Some(42));
        assert_eq!(name(&alias), "mysterious object");
    }
}
