// Copyright (C) 2020-2024 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Why a placement was refused. These are ordinary outcomes, not failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    Overlap,
    NotValidPlacement,
    FirstMoveMustBeAtStart,
    OutOfBounds,
    NotAPlacement,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PlaceError::Overlap => "ERROR: OVERLAP",
            PlaceError::NotValidPlacement => "ERROR: Not valid placement",
            PlaceError::FirstMoveMustBeAtStart => "ERROR: FIRST MOVE MUST BE PLACED AT START",
            PlaceError::OutOfBounds => "ERROR: OUT OF BOUNDS",
            PlaceError::NotAPlacement => "ERROR: not a placement",
        })
    }
}

impl std::error::Error for PlaceError {}
