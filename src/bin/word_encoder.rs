use zvocab::session::run_encode_session;
use zvocab::tool::run_tool;

const USAGE: &str = "word-encoder - pack a word into its pair of vocabulary tokens

Usage: word-encoder [--config <file.toml>]

Enter a word at the prompt; only the first six characters count. End input to quit.";

fn main() {
    run_tool(USAGE, run_encode_session);
}
