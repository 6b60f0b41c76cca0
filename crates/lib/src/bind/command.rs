//! Remote command lines issued during a run.

use crate::remote::RemoteCommand;

/// Diagnostic invocation used to check that the tool exists on the guest.
pub fn probe(tool: &str) -> RemoteCommand {
  RemoteCommand::elevated(join_words([tool, "--help"]))
}

/// Create the mount point. Existing directories are fine.
pub fn make_dir(target: &str) -> RemoteCommand {
  RemoteCommand::elevated(join_words(["mkdir", "-p", target]))
}

/// `<tool> [args..] <source> <target>`.
pub fn mount(tool: &str, args: &[String], source: &str, target: &str) -> RemoteCommand {
  let words = std::iter::once(tool)
    .chain(args.iter().map(String::as_str))
    .chain([source, target]);
  RemoteCommand::elevated(join_words(words))
}

fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
  words.into_iter().map(quote).collect::<Vec<_>>().join(" ")
}

/// Quote a word for a POSIX shell, leaving it bare when that is safe.
pub fn quote(word: &str) -> String {
  let safe = !word.is_empty()
    && word
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));

  if safe {
    word.to_string()
  } else {
    format!("'{}'", word.replace('\'', r"'\''"))
  }
}
