/// Publicly visible part of an account, returned by login.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
}

/// Registration inputs are taken as submitted; uniqueness is enforced at the
/// database layer and no other format validation applies.
#[derive(Debug, Clone)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Clone)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

/// The four free-text personal fields. Reads return whatever is stored;
/// writes overwrite all four at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Profile {
    pub(crate) name: Option<String>,
    pub(crate) surname: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) telegram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfileUpdate {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) class: String,
    pub(crate) telegram: String,
}
