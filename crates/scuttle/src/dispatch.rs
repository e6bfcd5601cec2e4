//! The top-level command dispatcher: resolves a parsed [`Command`] against
//! the current inventory and either runs a verb handler or, for `open`,
//! captures a block body from the shared command stream.

use crate::builtins::{self, Outcome};
use crate::error::ScuttleError;
use crate::flow::Flow;
use crate::inventory::{self, InventoryHandle, Resolved};
use crate::item;
use crate::parse::Command;
use crate::sink::Sink;
use crate::source::CommandSource;

/// Runs one command against `inventory`, pulling further commands from
/// `source` if it's an `open`.
///
/// # Errors
/// Returns a [`ScuttleError::Lookup`] if an operand can't be found, a
/// [`ScuttleError::IncompatibleUse`] if neither side of a `use` accepts the
/// pairing, or any error the invoked behavior itself raises.
pub fn exec_command(
    command: &Command,
    inventory: &InventoryHandle,
    source: &mut dyn CommandSource,
    sink: &mut dyn Sink,
) -> Result<Flow, ScuttleError> {
    if command.verb == "open" {
        let commands = capture_block(&command.direct, source)?;
        let block = crate::block::ProgramBlock::new(
            command.direct.clone(),
            commands,
            InventoryHandle::clone(inventory),
        );
        inventory::append(inventory, item::program_block(block));
        return Ok(Flow::Normal);
    }

    let direct = inventory::lookup(inventory, &command.direct)?;
    let indirect = match &command.indirect {
        Some(name) => Some(inventory::lookup(inventory, name)?),
        None => None,
    };

    match command.verb.as_str() {
        "use" => verb_use(&direct, indirect.as_ref(), inventory, sink),
        "look at" => {
            verb_look_at(&direct, sink)?;
            Ok(Flow::Normal)
        }
        _ => Ok(Flow::Normal),
    }
}

/// Consumes commands from `source` until a matching `close`, returning the
/// captured body (excluding the terminator). Runs out silently at
/// end-of-input without a matching `close`, matching the reference
/// implementation.
fn capture_block(
    name: &str,
    source: &mut dyn CommandSource,
) -> Result<Vec<Command>, ScuttleError> {
    let mut commands = Vec::new();
    while let Some(command) = source.next_command()? {
        if command.verb == "close" && command.direct == name {
            return Ok(commands);
        }
        commands.push(command);
    }
    Ok(commands)
}

fn verb_use(
    direct: &Resolved,
    indirect: Option<&Resolved>,
    inventory: &InventoryHandle,
    sink: &mut dyn Sink,
) -> Result<Flow, ScuttleError> {
    let direct_item = direct
        .as_item()
        .ok_or_else(|| ScuttleError::type_error("can't use the inventory itself"))?;
    let Some(indirect) = indirect else {
        return Err(ScuttleError::type_error(format!(
            "use {} requires 'with' something",
            item::name(direct_item)
        )));
    };
    let indirect_item = indirect
        .as_item()
        .ok_or_else(|| ScuttleError::type_error("can't use the inventory itself"))?;

    if let Outcome::Completed(flow) = builtins::use_item(direct_item, indirect_item, inventory, sink)? {
        return Ok(flow);
    }
    if let Outcome::Completed(flow) = builtins::use_item(indirect_item, direct_item, inventory, sink)? {
        return Ok(flow);
    }
    Err(ScuttleError::incompatible_use(
        &item::name(direct_item),
        &item::name(indirect_item),
    ))
}

fn verb_look_at(resolved: &Resolved, sink: &mut dyn Sink) -> Result<(), ScuttleError> {
    let text = match resolved {
        Resolved::CurrentInventory(inv) => inventory::describe(inv),
        Resolved::Item(item) => format!("It's a {}", item::description(item)),
    };
    sink.write_line(&text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line;
    use crate::sink::CollectStringSink;
    use crate::source::SliceSource;

    #[test]
    fn look_at_writes_item_description() {
        let inv = inventory::new(vec![item::pieces_o_eight(3)], None);
        let command = parse_line("look at pieces o' eight").unwrap();
        let mut sink = CollectStringSink::new();
        let mut source = SliceSource::new(Vec::new());
        exec_command(&command, &inv, &mut source, &mut sink).unwrap();
        assert_eq!(sink.output(), "It's a 3 pieces o' eight\n");
    }

    #[test]
    fn look_at_inventory_writes_carrying_list() {
        let inv = inventory::new(vec![item::pieces_o_eight(1)], None);
        let command = parse_line("look at inventory").unwrap();
        let mut sink = CollectStringSink::new();
        let mut source = SliceSource::new(Vec::new());
        exec_command(&command, &inv, &mut source, &mut sink).unwrap();
        assert_eq!(sink.output(), "I'm carrying 1 pieces o' eight.\n");
    }

    #[test]
    fn no_op_verb_still_resolves_operands() {
        let inv = inventory::new(Vec::new(), None);
        let command = parse_line("push rock").unwrap();
        let mut sink = CollectStringSink::new();
        let mut source = SliceSource::new(Vec::new());
        let err = exec_command(&command, &inv, &mut source, &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "I can't see rock here");
    }

    #[test]
    fn open_captures_until_matching_close() {
        let inv = inventory::new(Vec::new(), None);
        let commands: Vec<Command> = ["look at inventory", "close printer"]
            .into_iter()
            .map(|l| parse_line(l).unwrap())
            .collect();
        let mut source = SliceSource::new(commands);
        let open_command = parse_line("open printer").unwrap();
        let mut sink = CollectStringSink::new();
        exec_command(&open_command, &inv, &mut source, &mut sink).unwrap();

        let resolved = inventory::lookup(&inv, "printer").unwrap();
        assert!(resolved.as_item().is_some());
        assert!(source.next_command().unwrap().is_none());
    }

    #[test]
    fn incompatible_use_reports_both_names() {
        let inv = inventory::new(vec![item::root_beer(), item::dishonest_shopkeeper()], None);
        let command = parse_line("use root beer with dishonest shopkeeper").unwrap();
        let mut sink = CollectStringSink::new();
        let mut source = SliceSource::new(Vec::new());
        let err = exec_command(&command, &inv, &mut source, &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "Can't use root beer with dishonest shopkeeper");
    }
}
