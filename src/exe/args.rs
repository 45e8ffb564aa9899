//! command line option handling for the base58check executable
use std::fmt;

use thiserror::Error;

/// a boolean option with a short and/or long name, taking no value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Flag {
    short: Option<char>,
    long: Option<&'static str>,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, self.long) {
            (None, None) => unreachable!("unnamed Flag"),
            (None, Some(long)) => write!(f, "\"--{long}\""),
            (Some(short), None) => write!(f, "\"-{short}\""),
            (Some(short), Some(long)) => write!(f, "\"--{long}\" / \"-{short}\""),
        }
    }
}

/// handle to a flag registered with [`FlagSet::add`]
#[derive(Clone, Copy, Debug)]
pub struct FlagRef(usize);

#[derive(Debug, Default)]
pub struct FlagSet {
    flags: Vec<(Flag, bool)>,
}

impl FlagSet {
    pub fn add(&mut self, short: Option<char>, long: Option<&'static str>) -> FlagRef {
        if short.is_none() && long.is_none() {
            panic!("flag must have at least a short or long name");
        }
        self.flags.push((Flag { short, long }, false));
        FlagRef(self.flags.len() - 1)
    }

    #[must_use]
    pub fn is_set(&self, flag: FlagRef) -> bool {
        self.flags[flag.0].1
    }

    fn set(&mut self, at: usize, value: Option<&str>) -> Result<(), OptionError> {
        let (flag, set) = &mut self.flags[at];
        if value.is_some() {
            return Err(OptionError::ValueForbidden(*flag));
        }
        *set = true;
        Ok(())
    }

    fn set_short(&mut self, name: char, value: Option<&str>) -> Result<(), OptionError> {
        match self.flags.iter().position(|(f, _)| f.short == Some(name)) {
            None => Err(OptionError::NoSuchShort(name)),
            Some(at) => self.set(at, value),
        }
    }

    fn set_long(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        match self.flags.iter().position(|(f, _)| f.long == Some(name)) {
            None => Err(OptionError::NoSuchLong(name.to_owned())),
            Some(at) => self.set(at, value),
        }
    }
}

pub fn parse<I: Iterator>(args: I, flags: &mut FlagSet) -> Result<(), Error>
where
    I::Item: AsRef<str>,
{
    let mut opts_done = false;
    for (pos, arg) in args.enumerate() {
        let arg = arg.as_ref();
        if arg.is_empty() {
            continue;
        }
        if !opts_done && arg.as_bytes()[0] == b'-' {
            if arg.len() >= 2 && arg.as_bytes()[1] == b'-' {
                if arg == "--" {
                    opts_done = true;
                    continue;
                }
                let (name, value) = match arg.bytes().enumerate().find(|(_, b)| *b == b'=') {
                    None => (&arg[2..], None),
                    Some((i, _)) => (&arg[2..i], Some(&arg[i + 1..])),
                };
                if name.is_empty() {
                    return Err(Error::EmptyName { pos });
                }
                if let Err(val) = flags.set_long(name, value) {
                    return Err(Error::Flag { pos, val });
                }
            } else {
                let (value, end) = match arg.bytes().enumerate().find(|(_, b)| *b == b'=') {
                    None => (None, arg.len()),
                    Some((i, _)) => (Some(&arg[i + 1..]), i),
                };
                if end <= 1 {
                    return Err(Error::EmptyName { pos });
                }
                for c in arg[1..end].chars() {
                    if let Err(val) = flags.set_short(c, value) {
                        return Err(Error::Flag { pos, val });
                    }
                }
            }
        } else {
            // this tool reads stdin only, there are no operands to accept
            return Err(Error::Operand {
                pos,
                val: arg.to_owned(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("{val} (at #{pos})")]
    Flag {
        pos: usize,
        #[source]
        val: OptionError,
    },
    #[error("malformed argument (at #{pos})")]
    EmptyName { pos: usize },
    #[error("unexpected operand {val:?} (at #{pos})")]
    Operand { pos: usize, val: String },
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OptionError {
    #[error("invalid argument \"-{0}\"")]
    NoSuchShort(char),
    #[error("invalid argument \"--{0}\"")]
    NoSuchLong(String),
    #[error("argument {0} has no value")]
    ValueForbidden(Flag),
}
