use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bootvars completions bash > ~/.bash_completion.d/bootvars\n\n\
                  Generate zsh completions:\n    bootvars completions zsh > ~/.zfunc/_bootvars\n\n\
                  Generate fish completions:\n    bootvars completions fish > ~/.config/fish/completions/bootvars.fish\n\n\
                  Generate PowerShell completions:\n    bootvars completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
