/// One variant per response line the protocol can emit. The wire form is
/// the exact string from [`Response::as_str`], CR LF terminated by the
/// line codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Prime,
    NotPrime,
    PowerOfTwo,
    NotPowerOfTwo,
    InvalidNumber,
    PrimeModeEnabled,
    PowerModeEnabled,
    UnknownAdminCommand,
    AdminCommandFormat,
}

impl Response {
    pub fn prime(is_prime: bool) -> Self {
        if is_prime {
            Self::Prime
        } else {
            Self::NotPrime
        }
    }

    pub fn power_of_two(is_power_of_two: bool) -> Self {
        if is_power_of_two {
            Self::PowerOfTwo
        } else {
            Self::NotPowerOfTwo
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prime => "Prime",
            Self::NotPrime => "Not prime",
            Self::PowerOfTwo => "Power of two",
            Self::NotPowerOfTwo => "Not power of two",
            Self::InvalidNumber => "Invalid number",
            Self::PrimeModeEnabled => "Admin command: Prime mode enabled",
            Self::PowerModeEnabled => "Admin command: Power mode enabled",
            Self::UnknownAdminCommand => "Unknown admin command",
            Self::AdminCommandFormat => {
                "Admin command format: [adminLogin] [adminPassword] [command]"
            }
        }
    }
}

impl AsRef<str> for Response {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
