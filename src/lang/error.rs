use super::Column;

/// Status codes are small signed integers. Zero is success, positive values
/// are errors and negative values are signals that do not indicate an error.
pub type Status = i8;

pub struct Error {
    code: Status,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as Status,
            column: 0..0,
            message: "",
        }
    }

    /// Raising zero is never success, it turns into `NoCheese`.
    pub fn from_code(code: Status) -> Error {
        Error {
            code: if code == 0 {
                ErrorCode::NoCheese as Status
            } else {
                code
            },
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> Status {
        self.code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn is_error(&self) -> bool {
        self.code > 0
    }

    /// Comment and accept signals. These never reach the caller of `process`.
    pub fn is_signal(&self) -> bool {
        self.code < 0 && self.code > ErrorCode::UserStatus as Status
    }

    pub fn is_user_status(&self) -> bool {
        self.code <= ErrorCode::UserStatus as Status
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoCheese = 1,
    NumberOverflow = 2,
    StackUnderflow = 3,
    StackOverflow = 4,
    AcceptBufferOverflow = 5,
    IndexOutOfRange = 6,
    UnknownCommand = 7,
    DivideByZero = 8,
    User = 9,
    IgnoreToEol = -1,
    AcceptPending = -2,
    AcceptCancelled = -3,
    UserStatus = -4,
}

/// Short description of a status code.
pub fn describe(code: Status) -> &'static str {
    match code {
        0 => "ok",
        1 => "++?????++ Out of Cheese Error. Redo From Start",
        2 => "number overflow",
        3 => "stack underflow",
        4 => "stack overflow",
        5 => "input buffer overflow",
        6 => "index out of range",
        7 => "unknown command",
        8 => "divide by zero",
        -1 => "ignore to end of line",
        -2 => "accept pending",
        -3 => "input cancelled",
        _ => "??",
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        self.code == other.code && self.column == other.column
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = describe(self.code);
        let mut suffix = String::new();
        if (0..0) != self.column {
            suffix.push_str(&format!(" IN ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str == "??" {
            let kind = if self.code < 0 { "status" } else { "error" };
            write!(f, "user {} {}{}", kind, self.code, suffix)
        } else {
            write!(f, "{} ({}){}", code_str, self.code, suffix)
        }
    }
}
