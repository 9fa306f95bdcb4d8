//! printf-style message formatting
//!
//! Templates use platform formatter syntax (`%s`, `%d`, `%5.2f`, `%2$s`, ...).
//! [`format_message`] applies the facade's two-tier policy: sequential
//! single-argument passes first, then one all-arguments pass as a fallback.

mod arg;
mod specifier;

pub use arg::Arg;

use specifier::Token;

use crate::error::FormatError;

/// Format `template` with all `args` in a single pass
///
/// Ordinary specifiers consume arguments left to right; indexed specifiers
/// (`%2$s`) pick their argument without advancing. Surplus arguments are
/// ignored.
pub fn format(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;

    for token in specifier::parse(template)? {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Percent => out.push('%'),
            Token::Newline => out.push('\n'),
            Token::Conversion(spec) => {
                let arg = match spec.index {
                    Some(index) => index.checked_sub(1).and_then(|i| args.get(i)),
                    None => {
                        next += 1;
                        args.get(next - 1)
                    }
                };
                let arg = arg.ok_or_else(|| FormatError::MissingArgument {
                    spec: spec.raw.to_string(),
                })?;
                out.push_str(&spec.render(arg)?);
            }
        }
    }
    Ok(out)
}

/// Run one sequential pass: `arg` fills the first pending specifier
///
/// Everything not consumed, including `%%` and `%n`, is written back in
/// template form so the next pass can see it.
pub fn substitute_first(template: &str, arg: &Arg) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut filled = false;

    for token in specifier::parse(template)? {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Percent => out.push_str("%%"),
            Token::Newline => out.push_str("%n"),
            Token::Conversion(spec) => match spec.index {
                Some(1) => out.push_str(&spec.render(arg)?),
                Some(_) => {
                    return Err(FormatError::MissingArgument {
                        spec: spec.raw.to_string(),
                    })
                }
                None if !filled => {
                    filled = true;
                    out.push_str(&spec.render(arg)?);
                }
                None => out.push_str(spec.raw),
            },
        }
    }
    Ok(out)
}

/// Format a log message with the two-tier policy
///
/// - No arguments: the template is returned verbatim.
/// - Otherwise each argument runs [`substitute_first`] over the running
///   output, and a final zero-argument pass resolves escapes and rejects
///   unfilled specifiers.
/// - If any of that fails, [`format`] is tried once with every argument
///   against the unmodified template; its error is returned if it fails too.
///
/// Text produced by an earlier pass is re-parsed by later ones, so a
/// substituted value containing `%` can break the sequential tier (the
/// fallback usually recovers it).
pub fn format_message(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    match format_sequential(template, args) {
        Ok(output) => Ok(output),
        Err(err) => {
            tracing::trace!(
                template,
                error = %err,
                "sequential formatting failed, retrying in one pass"
            );
            format(template, args)
        }
    }
}

fn format_sequential(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut output = template.to_string();
    for arg in args {
        output = substitute_first(&output, arg)?;
    }
    format(&output, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<Arg> {
        values.iter().map(|v| Arg::from(*v)).collect()
    }

    #[test]
    fn test_format_single_pass() {
        let out = format("%s has %d items", &[Arg::from("cart"), Arg::from(3)]).unwrap();
        assert_eq!(out, "cart has 3 items");
    }

    #[test]
    fn test_format_indexed_arguments() {
        let out = format("%2$s %1$s %s", &args(&["a", "b"])).unwrap();
        assert_eq!(out, "b a a");
    }

    #[test]
    fn test_format_ignores_surplus_arguments() {
        assert_eq!(format("only %s", &args(&["one", "two"])).unwrap(), "only one");
    }

    #[test]
    fn test_format_missing_argument() {
        assert_eq!(
            format("%s and %s", &args(&["one"])).unwrap_err(),
            FormatError::MissingArgument {
                spec: "%s".to_string()
            }
        );
    }

    #[test]
    fn test_substitute_first_keeps_later_specifiers() {
        let out = substitute_first("%s-%05d %% %n", &Arg::from("a")).unwrap();
        assert_eq!(out, "a-%05d %% %n");
    }

    #[test]
    fn test_message_without_args_is_verbatim() {
        assert_eq!(format_message("100% %s", &[]).unwrap(), "100% %s");
    }

    #[test]
    fn test_message_without_placeholders_ignores_args() {
        let out = format_message("no placeholders", &[Arg::from(1), Arg::from("y")]).unwrap();
        assert_eq!(out, "no placeholders");
    }

    #[test]
    fn test_message_sequential_substitution() {
        let a = Arg::from("left");
        let b = Arg::from(7);

        let first = substitute_first("%s-%s", &a).unwrap();
        let second = substitute_first(&first, &b).unwrap();
        let expected = format(&second, &[]).unwrap();

        assert_eq!(format_message("%s-%s", &[a, b]).unwrap(), expected);
        assert_eq!(expected, "left-7");
    }

    #[test]
    fn test_message_scenario_called_with_arguments() {
        let out = format_message("Called with %d arguments", &[Arg::from(2)]).unwrap();
        assert_eq!(out, "Called with 2 arguments");
    }

    #[test]
    fn test_message_resolves_escapes() {
        let out = format_message("%d%% done%n", &[Arg::from(40)]).unwrap();
        assert_eq!(out, "40% done\n");
    }

    #[test]
    fn test_message_fallback_recovers_percent_in_value() {
        // Pass one yields "50% then %d", which no longer parses
        assert!(format_sequential("%s then %d", &[Arg::from("50%"), Arg::from(3)]).is_err());

        let out = format_message("%s then %d", &[Arg::from("50%"), Arg::from(3)]).unwrap();
        assert_eq!(out, "50% then 3");
    }

    #[test]
    fn test_message_fallback_recovers_indexed_template() {
        let out = format_message("%2$s before %1$s", &args(&["a", "b"])).unwrap();
        assert_eq!(out, "b before a");
    }

    #[test]
    fn test_message_reformats_substituted_placeholders() {
        // "%s" from the first value is filled by the second pass, leaving the
        // template's own second "%s" unfilled; the fallback then wins.
        let out = format_message("%s and %s", &args(&["%s", "x"])).unwrap();
        assert_eq!(out, "%s and x");
    }

    #[test]
    fn test_message_both_tiers_fail() {
        let err = format_message("%s-%s", &args(&["only"])).unwrap_err();
        assert!(matches!(err, FormatError::MissingArgument { .. }));

        let err = format_message("%d items", &args(&["many"])).unwrap_err();
        assert!(matches!(err, FormatError::IllegalConversion { conversion: 'd', .. }));
    }
}
