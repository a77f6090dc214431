/// Admin credentials compared verbatim against the first two tokens of
/// every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Request<'a> {
    /// Credential-matching line requesting a mode switch. `None` when the
    /// line carried the credentials but no subcommand.
    Admin { subcommand: Option<&'a str> },
    /// Any other line: the first token is a number to classify under the
    /// current mode.
    Query { number: &'a str },
}

impl<'a> Request<'a> {
    /// Classifies one line. Never fails: malformed lines degrade to a
    /// `Query` whose token will not parse as a number.
    ///
    /// Tokens are split on single spaces, so consecutive spaces produce
    /// empty tokens. A line with a leading or doubled space therefore
    /// shifts the credential positions and can never match them; this
    /// matches the protocol as deployed.
    pub fn parse(line: &'a str, credentials: &Credentials) -> Self {
        let tokens: Vec<&str> = line.split(' ').collect();

        // `split` yields at least one token (an empty line gives `[""]`),
        // and a line with fewer than two tokens cannot carry credentials.
        if tokens.len() >= 2
            && tokens[0] == credentials.login
            && tokens[1] == credentials.password
        {
            Request::Admin {
                subcommand: tokens.get(2).copied(),
            }
        } else {
            Request::Query { number: tokens[0] }
        }
    }
}
