use zvocab::session::run_verb_session;
use zvocab::tool::run_tool;

const USAGE: &str = "verb-parser - show the id byte and flag bits of an encoded verb number

Usage: verb-parser [--config <file.toml>]

Enter an encoded number at the prompt. End input to quit.";

fn main() {
    run_tool(USAGE, run_verb_session);
}
