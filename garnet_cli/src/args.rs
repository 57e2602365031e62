//! Command-line argument parsing.
//!
//! A single left-to-right scan over the tokens after the program name.
//! Scanning stops at the first token that does not start with `-`, or at
//! a bare `-` (read the program from standard input). Switches that end
//! the invocation on their own (`--version`, `--copyright`) surface as
//! [`Invocation`] variants rather than exiting from inside the parser.

use std::borrow::Cow;
use std::path::Path;
use thiserror::Error;

/// Where the program text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// A program file named on the command line.
    File(&'a Path),
    /// Inline command text from `-e`. A single attached occurrence
    /// borrows the argv token; accumulation across repeats allocates an
    /// owned, newline-joined buffer.
    Command(Cow<'a, str>),
    /// Standard input. `explicit` is set by a bare `-` token; the
    /// implicit form (no input named at all) is what the interactive
    /// shell fallback keys on.
    Stdin {
        /// Whether stdin was requested with a bare `-`.
        explicit: bool,
    },
}

impl Source<'_> {
    /// The name recorded for this input in compile contexts and
    /// diagnostics: the file path, `-e` for inline commands, `-` for
    /// standard input.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Command(_) => "-e".to_string(),
            Source::Stdin { .. } => "-".to_string(),
        }
    }
}

/// The parsed intent of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarnetArgs<'a> {
    /// The active input source.
    pub source: Source<'a>,
    /// Input is a precompiled bytecode image (`-b`).
    pub bytecode: bool,
    /// Parse and compile but never execute (`-c`).
    pub check_syntax: bool,
    /// Request compiler dump output (`-v`, `--verbose`).
    pub verbose: bool,
    /// Print the version banner before dispatch (`-v`).
    pub show_version: bool,
    /// Compile and export an artifact instead of executing (`-O`).
    pub compile: bool,
    /// Explicit output destination (`-o<path>`; `-` means stdout).
    pub output: Option<&'a Path>,
    /// Symbol name for the embeddable C source-array export
    /// (`-B<symbol>`). Always non-empty when present.
    pub init_symbol: Option<&'a str>,
    /// Positional arguments forwarded to the executed program.
    pub program_args: Vec<&'a str>,
}

impl Default for GarnetArgs<'_> {
    fn default() -> Self {
        Self {
            source: Source::Stdin { explicit: false },
            bytecode: false,
            check_syntax: false,
            verbose: false,
            show_version: false,
            compile: false,
            output: None,
            init_symbol: None,
            program_args: Vec::new(),
        }
    }
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation<'a> {
    /// Run the driver with the given configuration.
    Run(GarnetArgs<'a>),
    /// Print the version banner and exit successfully (`--version`).
    ShowVersion,
    /// Print the copyright banner and exit successfully
    /// (`--copyright`).
    ShowCopyright,
}

/// Configuration errors detected while scanning the argument list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// `-e` with no command text attached or following.
    #[error("no code specified for -e")]
    NoCodeGiven,
    /// `-B` with an empty symbol.
    #[error("function name is not specified")]
    NoFunctionName,
    /// `-o` with an empty path.
    #[error("output file name is not specified")]
    NoOutputFile,
    /// A short switch the driver does not recognize.
    #[error("invalid option '{0}'")]
    UnknownOption(String),
    /// A long switch the driver does not recognize.
    #[error("invalid option '--{0}'")]
    UnknownLongOption(String),
}

/// Parse the raw argument list (program name already stripped).
///
/// # Errors
///
/// Returns an [`ArgsError`] for unknown switches and for switches whose
/// required text is missing.
pub fn parse_args_vec(raw: &[String]) -> Result<Invocation<'_>, ArgsError> {
    let mut args = GarnetArgs::default();
    let mut command: Option<Cow<'_, str>> = None;
    let mut stdin_explicit = false;
    let mut i = 0;

    while i < raw.len() {
        let tok = raw[i].as_str();
        if !tok.starts_with('-') {
            break;
        }
        if tok == "-" {
            stdin_explicit = true;
            i += 1;
            break;
        }

        let Some(flag) = tok[1..].chars().next() else {
            return Err(ArgsError::UnknownOption(tok.to_string()));
        };
        let rest = &tok[1 + flag.len_utf8()..];

        match flag {
            'b' if rest.is_empty() => args.bytecode = true,
            'c' if rest.is_empty() => args.check_syntax = true,
            'e' => {
                // Attached text and next-token text feed the same
                // accumulation step.
                let text = if rest.is_empty() {
                    if i + 1 >= raw.len() {
                        return Err(ArgsError::NoCodeGiven);
                    }
                    i += 1;
                    raw[i].as_str()
                } else {
                    rest
                };
                command = Some(match command.take() {
                    None => Cow::Borrowed(text),
                    Some(existing) => {
                        let mut buf = existing.into_owned();
                        buf.push('\n');
                        buf.push_str(text);
                        Cow::Owned(buf)
                    }
                });
            }
            'v' if rest.is_empty() => {
                args.show_version = true;
                args.verbose = true;
            }
            'O' if rest.is_empty() => args.compile = true,
            'o' => {
                if rest.is_empty() {
                    return Err(ArgsError::NoOutputFile);
                }
                args.output = Some(Path::new(rest));
            }
            'B' => {
                if rest.is_empty() {
                    return Err(ArgsError::NoFunctionName);
                }
                args.init_symbol = Some(rest);
            }
            '-' => match rest {
                "version" => return Ok(Invocation::ShowVersion),
                "copyright" => return Ok(Invocation::ShowCopyright),
                "verbose" => args.verbose = true,
                _ => return Err(ArgsError::UnknownLongOption(rest.to_string())),
            },
            _ => return Err(ArgsError::UnknownOption(tok.to_string())),
        }
        i += 1;
    }

    // An inline command wins the input slot; otherwise bare `-`, then
    // the first positional token as the program file. With a command or
    // stdin source, positionals are not consumed as a file and all
    // forward to the program.
    args.source = if let Some(text) = command {
        Source::Command(text)
    } else if stdin_explicit {
        Source::Stdin { explicit: true }
    } else if i < raw.len() {
        let file = Path::new(raw[i].as_str());
        i += 1;
        Source::File(file)
    } else {
        Source::Stdin { explicit: false }
    };
    args.program_args = raw[i..].iter().map(String::as_str).collect();

    Ok(Invocation::Run(args))
}

/// Usage text printed on configuration errors.
#[must_use]
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} [switches] programfile\n\
         switches:\n\
         \x20 -b           load and execute a precompiled bytecode (.gbc) file\n\
         \x20 -c           check syntax only\n\
         \x20 -e 'command' one line of script\n\
         \x20 -O           compile and write a bytecode artifact\n\
         \x20 -o<outfile>  place the output into <outfile>\n\
         \x20 -B<symbol>   emit the compiled bytecode as a C array named <symbol>\n\
         \x20 -v           print version number, then run in verbose mode\n\
         \x20 --verbose    run in verbose mode\n\
         \x20 --version    print the version\n\
         \x20 --copyright  print the copyright\n"
    )
}
