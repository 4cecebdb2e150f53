//! Functions callable from the text form.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::collections::HashMap;
use std::fmt;
use bytes::Bytes;
use crate::error::ContentError;


//------------ Builtin -------------------------------------------------------

/// A function that can be called from the text form.
///
/// The function receives the variable table and the encoded arguments and
/// returns the octets to insert in place of the call.
pub type Builtin = Box<
    dyn Fn(&mut Vars, Vec<Bytes>) -> Result<Bytes, ContentError>
        + Send + Sync
>;


//------------ Builtins ------------------------------------------------------

/// A table of functions by name.
///
/// The default table contains `define` and `var`. An empty table can be
/// created via [`Builtins::empty`].
pub struct Builtins {
    functions: HashMap<String, Builtin>,
}

impl Builtins {
    /// Creates a table without any functions.
    pub fn empty() -> Self {
        Builtins { functions: HashMap::new() }
    }

    /// Adds a function to the table.
    ///
    /// An existing function with the same name is replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&mut Vars, Vec<Bytes>) -> Result<Bytes, ContentError>
            + Send + Sync + 'static
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Returns the function with the given name.
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.functions.get(name)
    }
}

impl Default for Builtins {
    fn default() -> Self {
        let mut res = Self::empty();
        res.insert("define", define);
        res.insert("var", var);
        res
    }
}

impl fmt::Debug for Builtins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        f.debug_tuple("Builtins").field(&names).finish()
    }
}


//------------ Vars ----------------------------------------------------------

/// The variables of a translation.
///
/// Names are strings, values are octet sequences.
#[derive(Clone, Debug, Default)]
pub struct Vars {
    values: HashMap<String, Bytes>,
}

impl Vars {
    /// Creates an empty variable table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning its previous value.
    pub fn insert(
        &mut self, name: impl Into<String>, value: impl Into<Bytes>
    ) -> Option<Bytes> {
        self.values.insert(name.into(), value.into())
    }

    /// Returns the value of a variable.
    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.values.get(name)
    }

    /// Returns whether a variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}


//------------ Default Functions ---------------------------------------------

/// `define(name, value)` sets a variable and expands to nothing.
///
/// Variables can be redefined.
fn define(vars: &mut Vars, args: Vec<Bytes>) -> Result<Bytes, ContentError> {
    let [name, value]: [Bytes; 2] = match args.try_into() {
        Ok(args) => args,
        Err(_) => {
            xerr!(return Err("expected two arguments to define()".into()))
        }
    };
    vars.insert(String::from_utf8_lossy(&name), value);
    Ok(Bytes::new())
}

/// `var(name)` expands to the value of a variable.
///
/// With a second argument, that argument is used if the variable isn’t
/// set. Otherwise, an undefined variable is an error.
fn var(vars: &mut Vars, args: Vec<Bytes>) -> Result<Bytes, ContentError> {
    let mut args = args.into_iter();
    let (name, default) = match (args.next(), args.next(), args.next()) {
        (Some(name), default, None) => (name, default),
        _ => {
            xerr!(return Err(
                "expected one or two arguments to var()".into()
            ))
        }
    };
    let name = String::from_utf8_lossy(&name);
    match (vars.get(&name), default) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(default)) => Ok(default),
        (None, None) => {
            xerr!(Err(format!("var() with undefined name {:?}", name).into()))
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn call(
        builtins: &Builtins, vars: &mut Vars, name: &str, args: &[&[u8]]
    ) -> Result<Bytes, ContentError> {
        let args = args.iter().map(|arg| Bytes::copy_from_slice(arg));
        (builtins.get(name).unwrap())(vars, args.collect())
    }

    #[test]
    fn define_and_var() {
        let builtins = Builtins::default();
        let mut vars = Vars::new();

        assert!(call(&builtins, &mut vars, "var", &[b"a"]).is_err());
        assert_eq!(
            call(&builtins, &mut vars, "var", &[b"a", b"dflt"]).unwrap(),
            b"dflt".as_ref()
        );
        assert!(
            call(&builtins, &mut vars, "define", &[b"a", b"1"])
                .unwrap().is_empty()
        );
        assert_eq!(
            call(&builtins, &mut vars, "var", &[b"a"]).unwrap(),
            b"1".as_ref()
        );
        assert_eq!(
            call(&builtins, &mut vars, "var", &[b"a", b"dflt"]).unwrap(),
            b"1".as_ref()
        );
        call(&builtins, &mut vars, "define", &[b"a", b"2"]).unwrap();
        assert_eq!(vars.get("a").unwrap(), b"2".as_ref());
    }

    #[test]
    fn arity() {
        let builtins = Builtins::default();
        let mut vars = Vars::new();
        assert!(call(&builtins, &mut vars, "define", &[]).is_err());
        assert!(call(&builtins, &mut vars, "define", &[b"a"]).is_err());
        assert!(
            call(&builtins, &mut vars, "define", &[b"a", b"b", b"c"]).is_err()
        );
        assert!(call(&builtins, &mut vars, "var", &[]).is_err());
        assert!(
            call(&builtins, &mut vars, "var", &[b"a", b"b", b"c"]).is_err()
        );
    }

    #[test]
    fn table() {
        let mut builtins = Builtins::empty();
        assert!(builtins.get("define").is_none());
        builtins.insert("twice", |_: &mut Vars, args: Vec<Bytes>| {
            Ok(args.concat().repeat(2).into())
        });
        assert!(builtins.get("twice").is_some());
        assert_eq!(
            call(&builtins, &mut Vars::new(), "twice", &[b"ab", b"c"])
                .unwrap(),
            b"abcabc".as_ref()
        );
        assert_eq!(format!("{:?}", builtins), "Builtins([\"twice\"])");
    }
}
