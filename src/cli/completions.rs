use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mmake completions bash > ~/.bash_completion.d/mmake\n\n\
                  Generate zsh completions:\n    mmake completions zsh > ~/.zfunc/_mmake\n\n\
                  Generate fish completions:\n    mmake completions fish > ~/.config/fish/completions/mmake.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
