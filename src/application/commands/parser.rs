// src/application/commands/parser.rs
//
// Turns one line of console input into a ShellCommand.
//
// Arguments are separated by `|` because breeds contain spaces:
//   add dary | english mastiff | 8 | https://...

use super::ShellCommand;

pub const HELP: &str = "\
Commands (arguments separated by '|'):
  list                                   dogs in the shelter
  add name | breed | age | photo         add a dog
  remove name | breed                    remove a dog
  update name | breed | new name | new breed | age | photo
  filter [breed] [| max age]             dogs of a breed younger than max age
  search text                            dogs whose name or breed contains text
  show [breed] [| max age]               start showing dogs for adoption
  next                                   show the next dog
  adopt                                  adopt the dog being shown
  stop                                   stop showing dogs
  adopted                                the adoption list
  undo | redo | clear                    history
  status                                 counts and history depth
  open | save                            reload / flush the stores
  help | quit";

pub fn parse(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('|').map(str::trim).collect()
    };

    let command = match verb.to_lowercase().as_str() {
        "" | "help" | "?" => ShellCommand::Help,
        "list" | "ls" => ShellCommand::List,
        "adopted" => ShellCommand::Adopted,
        "status" => ShellCommand::Status,
        "add" => {
            let [name, breed, age, photograph] = exact::<4>(verb, &args)?;
            ShellCommand::Add {
                name: name.to_string(),
                breed: breed.to_string(),
                age: parse_age(age)?,
                photograph: photograph.to_string(),
            }
        }
        "remove" | "rm" => {
            let [name, breed] = exact::<2>(verb, &args)?;
            ShellCommand::Remove {
                name: name.to_string(),
                breed: breed.to_string(),
            }
        }
        "update" => {
            let [old_name, old_breed, name, breed, age, photograph] = exact::<6>(verb, &args)?;
            ShellCommand::Update {
                old_name: old_name.to_string(),
                old_breed: old_breed.to_string(),
                name: name.to_string(),
                breed: breed.to_string(),
                age: parse_age(age)?,
                photograph: photograph.to_string(),
            }
        }
        "filter" => {
            let (breed, max_age) = breed_and_age(verb, &args)?;
            ShellCommand::Filter { breed, max_age }
        }
        "search" | "find" => ShellCommand::Search {
            text: rest.to_string(),
        },
        "show" => {
            let (breed, max_age) = breed_and_age(verb, &args)?;
            ShellCommand::Show { breed, max_age }
        }
        "next" | "n" => ShellCommand::Next,
        "adopt" => ShellCommand::Adopt,
        "stop" => ShellCommand::Stop,
        "undo" | "u" => ShellCommand::Undo,
        "redo" | "r" => ShellCommand::Redo,
        "clear" => ShellCommand::ClearHistory,
        "open" => ShellCommand::Open,
        "save" => ShellCommand::Save,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    Ok(command)
}

fn exact<'a, const N: usize>(verb: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args).map_err(|_| {
        format!(
            "'{}' takes {} arguments separated by '|', got {}",
            verb,
            N,
            args.len()
        )
    })
}

fn parse_age(raw: &str) -> Result<i32, String> {
    raw.parse::<i32>()
        .map_err(|_| format!("Age must be a whole number, got '{}'", raw))
}

/// `[breed] [| max age]`; an empty breed matches every breed and a missing
/// age bounds nothing
fn breed_and_age(verb: &str, args: &[&str]) -> Result<(String, Option<i32>), String> {
    match args {
        [] => Ok((String::new(), None)),
        [breed] | [breed, ""] => Ok((breed.to_string(), None)),
        [breed, age] => Ok((breed.to_string(), Some(parse_age(age)?))),
        _ => Err(format!("'{}' takes at most a breed and a max age", verb)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_spaces_in_breed() {
        let cmd = parse("add dary | english mastiff | 8 | d.jpg").unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Add {
                name: "dary".to_string(),
                breed: "english mastiff".to_string(),
                age: 8,
                photograph: "d.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_age_parses_for_validation() {
        match parse("add rex | husky | -3 | x").unwrap() {
            ShellCommand::Add { age, .. } => assert_eq!(age, -3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse("remove mec").unwrap_err();
        assert!(err.contains("takes 2 arguments"));
    }

    #[test]
    fn test_bad_age() {
        assert!(parse("add rex | husky | old | x").is_err());
    }

    #[test]
    fn test_filter_forms() {
        assert_eq!(
            parse("filter").unwrap(),
            ShellCommand::Filter {
                breed: String::new(),
                max_age: None
            }
        );
        assert_eq!(
            parse("filter | 3").unwrap(),
            ShellCommand::Filter {
                breed: String::new(),
                max_age: Some(3)
            }
        );
        assert_eq!(
            parse("show poodle | 5").unwrap(),
            ShellCommand::Show {
                breed: "poodle".to_string(),
                max_age: Some(5)
            }
        );
    }

    #[test]
    fn test_search_keeps_whole_text() {
        assert_eq!(
            parse("search english mas").unwrap(),
            ShellCommand::Search {
                text: "english mas".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_and_blank() {
        assert!(parse("fetch").is_err());
        assert_eq!(parse("   ").unwrap(), ShellCommand::Help);
        assert_eq!(parse("UNDO").unwrap(), ShellCommand::Undo);
    }
}
