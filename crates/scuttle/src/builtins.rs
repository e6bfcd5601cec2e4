//! Per-item `use` semantics: the arithmetic, comparison, and side-effects
//! that give the language its verbs. Each item kind gets a `match` arm here
//! instead of an inheritance hierarchy, so dispatch is an explicit capability
//! probe (`coin_value`, `count`, `truthy`) rather than duck typing.

use crate::block;
use crate::error::ScuttleError;
use crate::flow::Flow;
use crate::inventory::{self, InventoryHandle, Resolved};
use crate::item::{self, ItemHandle, ItemKind};
use crate::sink::Sink;

/// The result of trying one side of a `use` pairing.
pub enum Outcome {
    /// This item has no `use` behavior for the given operand.
    NotApplicable,
    /// The use completed, possibly carrying a non-local return.
    Completed(Flow),
}

/// Tries `actor.use(target)`.
///
/// # Errors
/// Propagates any error raised while running a called/conditional block, or
/// a [`ScuttleError::Type`] when a required capability is missing.
pub fn use_item(
    actor: &ItemHandle,
    target: &ItemHandle,
    inventory: &InventoryHandle,
    sink: &mut dyn Sink,
) -> Result<Outcome, ScuttleError> {
    enum Kind {
        PiecesOEight,
        BottlesOGrog,
        ChromaticTriplicator,
        DuplicatingContraption,
        Scales,
        DishonestShopkeeper,
        NLicatorCreator,
        MultiplyingContraption(i64),
        RootBeer,
        VendingMachine,
        Shovel,
        ProgramBlock(block::ProgramBlock),
        Wrapped(ItemHandle),
    }

    let kind = match &actor.borrow().kind {
        ItemKind::PiecesOEight { .. } => Kind::PiecesOEight,
        ItemKind::BottlesOGrog { .. } => Kind::BottlesOGrog,
        ItemKind::ChromaticTriplicator => Kind::ChromaticTriplicator,
        ItemKind::DuplicatingContraption => Kind::DuplicatingContraption,
        ItemKind::Scales { .. } => Kind::Scales,
        ItemKind::DishonestShopkeeper => Kind::DishonestShopkeeper,
        ItemKind::NLicatorCreator => Kind::NLicatorCreator,
        ItemKind::MultiplyingContraption { factor } => Kind::MultiplyingContraption(*factor),
        ItemKind::RootBeer => Kind::RootBeer,
        ItemKind::VendingMachine => Kind::VendingMachine,
        ItemKind::Shovel => Kind::Shovel,
        ItemKind::ProgramBlock(block) => Kind::ProgramBlock(block.clone()),
        ItemKind::ColorWrapper { wrapped, .. } | ItemKind::AliasingWrapper { wrapped, .. } => {
            Kind::Wrapped(ItemHandle::clone(wrapped))
        }
    };

    match kind {
        Kind::PiecesOEight => Ok(pieces_o_eight_use(actor, target)),
        Kind::BottlesOGrog => Ok(Outcome::NotApplicable),
        Kind::ChromaticTriplicator => Ok(triplicate(target, inventory)),
        Kind::DuplicatingContraption => Ok(duplicate(target)),
        Kind::Scales => Ok(scales_use(actor, target)),
        Kind::DishonestShopkeeper => Ok(shopkeeper_use(target)),
        Kind::NLicatorCreator => Ok(nlicator_creator_use(target, inventory)),
        Kind::MultiplyingContraption(factor) => Ok(multiplying_use(target, factor)),
        Kind::RootBeer => Ok(root_beer_use(target, inventory)),
        Kind::VendingMachine => Ok(vending_use(target, inventory)),
        Kind::Shovel => Ok(Outcome::Completed(Flow::Return(ItemHandle::clone(target)))),
        Kind::ProgramBlock(program_block) => {
            let flow = block::use_block(&program_block, target, inventory, sink)?;
            Ok(Outcome::Completed(flow))
        }
        Kind::Wrapped(wrapped) => use_item(&wrapped, target, inventory, sink),
    }
}

fn pieces_o_eight_use(actor: &ItemHandle, other: &ItemHandle) -> Outcome {
    let Some(other_value) = item::coin_value(other) else {
        return Outcome::NotApplicable;
    };
    let self_count = item::count_get(actor).expect("PiecesOEight always has a count");
    let sum = self_count + other_value;
    if sum <= 0 {
        item::count_set(other, -sum);
        item::count_set(actor, 0);
    } else {
        item::count_set(actor, sum);
        item::count_set(other, 0);
    }
    Outcome::Completed(Flow::Normal)
}

fn triplicate(other: &ItemHandle, inventory: &InventoryHandle) -> Outcome {
    inventory::remove(inventory, other);
    for color in ["red", "green", "blue"] {
        inventory::append(inventory, item::color_wrapper(item::copy_item(other), color));
    }
    Outcome::Completed(Flow::Normal)
}

fn duplicate(other: &ItemHandle) -> Outcome {
    match item::count_get(other) {
        Some(count) => {
            item::count_set(other, count * 2);
            Outcome::Completed(Flow::Normal)
        }
        None => Outcome::NotApplicable,
    }
}

fn scales_use(actor: &ItemHandle, other: &ItemHandle) -> Outcome {
    match item::coin_value(other) {
        Some(value) => {
            item::truthy_set(actor, value != 0);
            Outcome::Completed(Flow::Normal)
        }
        None => Outcome::NotApplicable,
    }
}

fn shopkeeper_use(other: &ItemHandle) -> Outcome {
    match item::truthy_get(other) {
        Some(value) => {
            item::truthy_set(other, !value);
            Outcome::Completed(Flow::Normal)
        }
        None => Outcome::NotApplicable,
    }
}

fn nlicator_creator_use(other: &ItemHandle, inventory: &InventoryHandle) -> Outcome {
    match item::coin_value(other) {
        Some(factor) => {
            inventory::append(inventory, item::multiplying_contraption(factor));
            Outcome::Completed(Flow::Normal)
        }
        None => Outcome::NotApplicable,
    }
}

fn multiplying_use(other: &ItemHandle, factor: i64) -> Outcome {
    match item::count_get(other) {
        Some(count) => {
            item::count_set(other, count * factor);
            Outcome::Completed(Flow::Normal)
        }
        None => Outcome::NotApplicable,
    }
}

fn root_beer_use(other: &ItemHandle, inventory: &InventoryHandle) -> Outcome {
    if !item::is_color_wrapper(other) {
        return Outcome::NotApplicable;
    }
    let inner = item::wrapped_of(other).expect("checked is_color_wrapper above");
    inventory::remove(inventory, other);
    inventory::append(inventory, inner);
    Outcome::Completed(Flow::Normal)
}

fn vending_use(other: &ItemHandle, inventory: &InventoryHandle) -> Outcome {
    match item::coin_value(other) {
        Some(value) if value != 0 => {
            let count = item::count_get(other).expect("coin_value implies count");
            item::count_set(other, count - 1);
            match inventory::lookup(inventory, "bottles o' grog") {
                Ok(Resolved::Item(grog)) => {
                    let grog_count = item::count_get(&grog).expect("bottles o' grog has a count");
                    item::count_set(&grog, grog_count + 1);
                }
                _ => inventory::append(inventory, item::bottles_o_grog(1)),
            }
            Outcome::Completed(Flow::Normal)
        }
        _ => Outcome::NotApplicable,
    }
}
