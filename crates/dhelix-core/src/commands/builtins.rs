//! The standard command set.

use crate::config::HELP_TEXT;
use crate::contact::contact_target;
use crate::error::CommandError;
use crate::models::{Contact, Seed};

use super::{CommandInterpreter, CommandOutput, SideEffect};

/// NPC generators that have no implementation yet.
const PENDING_GENERATORS: &[&str] = &["mon", "hum"];

/// Text printed by `contact` without a (known) key.
fn contact_block(creator: &str, contacts: &[Contact]) -> String {
    let list = contacts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("\nCreated by {}\n\n{}", creator, list)
}

impl CommandInterpreter {
    /// Interpreter with `help`, `cwd`, `cd`, `ls`, `cat`, `clear`, `contact`,
    /// `mon` and `hum` registered.
    pub fn with_builtins(seed: &Seed) -> Self {
        let mut interpreter = Self::new();

        interpreter.register("help", |_, _| Ok(CommandOutput::block(HELP_TEXT)));

        interpreter.register("cwd", |fs, _| {
            Ok(CommandOutput::text(fs.current_directory()))
        });

        interpreter.register("cd", |fs, dir| {
            Ok(CommandOutput::text(fs.change_directory(dir)?))
        });

        interpreter.register("ls", |fs, _| Ok(CommandOutput::Lines(fs.list().lines())));

        interpreter.register("cat", |fs, file| {
            let file = file.ok_or(CommandError::MissingOperand("cat"))?;
            Ok(CommandOutput::block(fs.read_file(file)?))
        });

        interpreter.register("clear", |_, _| {
            Ok(CommandOutput::Effect {
                effect: SideEffect::Clear,
                message: None,
            })
        });

        let contacts = seed.contacts.clone();
        let block = contact_block(&seed.creator, &contacts);
        interpreter.register("contact", move |_, key| {
            let Some(contact) = key.and_then(|k| contacts.iter().find(|c| c.key == k)) else {
                return Ok(CommandOutput::block(&block));
            };

            let target = contact_target(contact).inspect_err(|e| {
                log::warn!("refusing to open contact '{}': {}", contact.key, e);
            })?;

            Ok(CommandOutput::Effect {
                effect: SideEffect::Open { target },
                message: Some(format!("Opening {}", contact)),
            })
        });

        for &name in PENDING_GENERATORS {
            interpreter.register(name, move |_, _| {
                Err(CommandError::NotImplemented(name.to_string()))
            });
        }

        interpreter
    }
}
