use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    coregen completions --shell bash > ~/.bash_completion.d/coregen\n\n\
                  Generate zsh completions:\n    coregen completions --shell zsh > ~/.zfunc/_coregen\n\n\
                  Generate fish completions:\n    coregen completions --shell fish > ~/.config/fish/completions/coregen.fish\n\n\
                  Generate PowerShell completions:\n    coregen completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
