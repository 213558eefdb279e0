//! Declarative parsing demo.
//!
//! Try `typed-cli --option3 42 --option4 file.txt` or `typed-cli --help`.

mod output;

use argtree_core::{Accessor, Command, Destination, Target};
use tracing::debug;

use crate::output::{init_tracing, or_exit, pretty};

#[derive(Debug, Default)]
struct Settings {
    option1: String,
    option2: String,
    option3: i64,
    option4: bool,
    help: bool,
}

impl Destination for Settings {
    fn target(&mut self, field: &str) -> Option<Target<'_>> {
        match field {
            "option1" => Some(Target::String(&mut self.option1)),
            "option2" => Some(Target::String(&mut self.option2)),
            "option3" => Some(Target::Int(&mut self.option3)),
            "option4" => Some(Target::Bool(&mut self.option4)),
            "help" => Some(Target::Bool(&mut self.help)),
            _ => None,
        }
    }
}

fn command() -> Command {
    let mut cmd = Command::new(
        "typed-cli",
        "A test CLI program. Try out various options and params to see the effect.",
    );
    cmd.string_option(Some("option1"), "option1", "default string", "This is the first option")
        .string_option(Some("option2"), "option2", "another default", "This is the second option")
        .int_option(Some("option3"), "option3", 23, "An int option")
        .bool_option(Some("option4"), "option4", false, "A bool option")
        .string_option(None, "option5", "bletch", "An option with no destination field")
        .bool_option(Some("help"), "help", false, "Show help");
    cmd
}

fn main() {
    init_tracing();

    let cmd = command();
    let matches = or_exit(cmd.parse_env());
    debug!(params = matches.params().len(), "Parsed arguments");

    let mut settings = Settings::default();
    matches.apply(&cmd, &mut settings);

    if settings.help {
        println!("{}", cmd.help());
        return;
    }

    println!("non-option params: {}", pretty(matches.params()));
    println!("options: {}", pretty(matches.options()));

    // Dynamic lookup through the flat result.
    println!("option3: {}", or_exit(matches.get_int("option3", 0)));

    println!("option1: {}", settings.option1);
    println!("option2: {}", settings.option2);
    println!("option3: {}", settings.option3);
    println!("option4: {}", settings.option4);
}
