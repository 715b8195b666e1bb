use zvocab::session::run_token_session;
use zvocab::tool::run_tool;

const USAGE: &str = "token-converter - turn vocabulary token pairs back into words

Usage: token-converter [--config <file.toml>]

Enter the two tokens of a word at the prompts. End input to quit.";

fn main() {
    run_tool(USAGE, run_token_session);
}
