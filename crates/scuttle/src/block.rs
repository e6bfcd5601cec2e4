//! `ProgramBlock`: a captured command sequence that is simultaneously an
//! `if`-branch and a callable closure, depending on what it's used with.
//!
//! Mode is chosen by a single test: does the other operand expose `truthy`?
//! If so this is a Scales (or a Scales inverted by the shopkeeper) and the
//! block behaves as a conditional, executing in the caller's own inventory
//! with no new scope. Otherwise the block is being *called*: a fresh child
//! of its *definition* inventory is created (closure, not dynamic scope),
//! the argument is bound, and a non-local return is caught here.

use crate::dispatch;
use crate::error::ScuttleError;
use crate::flow::Flow;
use crate::inventory::{self, InventoryHandle};
use crate::item::{self, ItemHandle};
use crate::parse::Command;
use crate::sink::Sink;
use crate::source::SliceSource;

#[derive(Debug, Clone)]
pub struct ProgramBlock {
    pub name: String,
    commands: Vec<Command>,
    definition_inventory: InventoryHandle,
}

impl ProgramBlock {
    #[must_use]
    pub fn new(name: String, commands: Vec<Command>, definition_inventory: InventoryHandle) -> Self {
        Self {
            name,
            commands,
            definition_inventory,
        }
    }
}

/// Dispatches `use block with other` in whichever mode `other` selects.
///
/// # Errors
/// Propagates any error raised while executing the block's body.
pub fn use_block(
    block: &ProgramBlock,
    other: &ItemHandle,
    caller_inventory: &InventoryHandle,
    sink: &mut dyn Sink,
) -> Result<Flow, ScuttleError> {
    match item::truthy_get(other) {
        Some(true) => execute(block.commands.clone(), caller_inventory, sink),
        Some(false) => Ok(Flow::Normal),
        None => call(block, other, caller_inventory, sink),
    }
}

/// Runs a command sequence against `inventory` over a fresh cursor,
/// returning as soon as a command yields a non-local return.
fn execute(
    commands: Vec<Command>,
    inventory: &InventoryHandle,
    sink: &mut dyn Sink,
) -> Result<Flow, ScuttleError> {
    let mut source = SliceSource::new(commands);
    while let Some(command) = source.next_command()? {
        let flow = dispatch::exec_command(&command, inventory, &mut source, sink)?;
        if matches!(flow, Flow::Return(_)) {
            return Ok(flow);
        }
    }
    Ok(Flow::Normal)
}

fn call(
    block: &ProgramBlock,
    argument: &ItemHandle,
    caller_inventory: &InventoryHandle,
    sink: &mut dyn Sink,
) -> Result<Flow, ScuttleError> {
    let frame = inventory::create_child(&block.definition_inventory);
    inventory::remove(caller_inventory, argument);

    let bound = item::aliasing_wrapper(item::copy_item(&item::unwrap(argument)), "mysterious object");
    inventory::append(&frame, bound);
    inventory::append(&frame, item::pieces_o_eight(1));
    inventory::append(&frame, item::bottles_o_grog(1));
    inventory::append(&frame, item::shovel());

    let flow = execute(block.commands.clone(), &frame, sink)?;

    if let Flow::Return(returned) = flow {
        let unwrapped = item::unwrap(&returned);
        if item::is_wrapper(argument) {
            item::replace(argument, unwrapped);
            inventory::append(caller_inventory, ItemHandle::clone(argument));
        } else {
            inventory::append(caller_inventory, unwrapped);
        }
    }

    Ok(Flow::Normal)
}
