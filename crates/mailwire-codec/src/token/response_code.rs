//! Canonical response codes.

use super::KnownToken;

// RFC 3501
/// `ALERT`
pub static ALERT: KnownToken = KnownToken::new("ALERT");
/// `BADCHARSET`, optionally followed by supported charsets.
pub static BAD_CHARSET: KnownToken = KnownToken::new("BADCHARSET");
/// `CAPABILITY`, followed by capabilities.
pub static CAPABILITY: KnownToken = KnownToken::new("CAPABILITY");
/// `PARSE`
pub static PARSE: KnownToken = KnownToken::new("PARSE");
/// `PERMANENTFLAGS`, followed by a flag list.
pub static PERMANENT_FLAGS: KnownToken = KnownToken::new("PERMANENTFLAGS");
/// `READ-ONLY`
pub static READ_ONLY: KnownToken = KnownToken::new("READ-ONLY");
/// `READ-WRITE`
pub static READ_WRITE: KnownToken = KnownToken::new("READ-WRITE");
/// `TRYCREATE`
pub static TRY_CREATE: KnownToken = KnownToken::new("TRYCREATE");
/// `UIDNEXT`, followed by a number.
pub static UIDNEXT: KnownToken = KnownToken::new("UIDNEXT");
/// `UIDVALIDITY`, followed by a number.
pub static UIDVALIDITY: KnownToken = KnownToken::new("UIDVALIDITY");
/// `UNSEEN`, followed by a number.
pub static UNSEEN: KnownToken = KnownToken::new("UNSEEN");

// RFC 2193, RFC 2221
/// `REFERRAL`, followed by URLs.
pub static REFERRAL: KnownToken = KnownToken::new("REFERRAL");

// RFC 3516
/// `UNKNOWN-CTE`
pub static UNKNOWN_CTE: KnownToken = KnownToken::new("UNKNOWN-CTE");

// RFC 4315
/// `APPENDUID`
pub static APPEND_UID: KnownToken = KnownToken::new("APPENDUID");
/// `COPYUID`
pub static COPY_UID: KnownToken = KnownToken::new("COPYUID");
/// `UIDNOTSTICKY`
pub static UID_NOT_STICKY: KnownToken = KnownToken::new("UIDNOTSTICKY");

// RFC 4551
/// `HIGHESTMODSEQ`
pub static HIGHEST_MOD_SEQ: KnownToken = KnownToken::new("HIGHESTMODSEQ");
/// `NOMODSEQ`
pub static NO_MOD_SEQ: KnownToken = KnownToken::new("NOMODSEQ");
/// `MODIFIED`
pub static MODIFIED: KnownToken = KnownToken::new("MODIFIED");

// RFC 4978
/// `COMPRESSIONACTIVE`
pub static COMPRESSION_ACTIVE: KnownToken = KnownToken::new("COMPRESSIONACTIVE");

// RFC 5182, RFC 5255
/// `NOTSAVED`
pub static NOT_SAVED: KnownToken = KnownToken::new("NOTSAVED");
/// `BADCOMPARATOR`
pub static BAD_COMPARATOR: KnownToken = KnownToken::new("BADCOMPARATOR");

// RFC 5464
/// `METADATA`
pub static METADATA: KnownToken = KnownToken::new("METADATA");
/// `METADATA LONGENTRIES`
pub static METADATA_LONG_ENTRIES: KnownToken = KnownToken::with_args("METADATA", &["LONGENTRIES"]);
/// `METADATA MAXSIZE`
pub static METADATA_MAX_SIZE: KnownToken = KnownToken::with_args("METADATA", &["MAXSIZE"]);
/// `METADATA TOOMANY`
pub static METADATA_TOO_MANY: KnownToken = KnownToken::with_args("METADATA", &["TOOMANY"]);
/// `METADATA NOPRIVATE`
pub static METADATA_NO_PRIVATE: KnownToken = KnownToken::with_args("METADATA", &["NOPRIVATE"]);

// RFC 5466
/// `UNDEFINED-FILTER`
pub static UNDEFINED_FILTER: KnownToken = KnownToken::new("UNDEFINED-FILTER");

// RFC 5530
/// `UNAVAILABLE`
pub static UNAVAILABLE: KnownToken = KnownToken::new("UNAVAILABLE");
/// `AUTHENTICATIONFAILED`
pub static AUTHENTICATION_FAILED: KnownToken = KnownToken::new("AUTHENTICATIONFAILED");
/// `AUTHORIZATIONFAILED`
pub static AUTHORIZATION_FAILED: KnownToken = KnownToken::new("AUTHORIZATIONFAILED");
/// `EXPIRED`
pub static EXPIRED: KnownToken = KnownToken::new("EXPIRED");
/// `PRIVACYREQUIRED`
pub static PRIVACY_REQUIRED: KnownToken = KnownToken::new("PRIVACYREQUIRED");
/// `CONTACTADMIN`
pub static CONTACT_ADMIN: KnownToken = KnownToken::new("CONTACTADMIN");
/// `NOPERM`
pub static NO_PERM: KnownToken = KnownToken::new("NOPERM");
/// `INUSE`
pub static IN_USE: KnownToken = KnownToken::new("INUSE");
/// `EXPUNGEISSUED`
pub static EXPUNGE_ISSUED: KnownToken = KnownToken::new("EXPUNGEISSUED");
/// `CORRUPTION`
pub static CORRUPTION: KnownToken = KnownToken::new("CORRUPTION");
/// `SERVERBUG`
pub static SERVER_BUG: KnownToken = KnownToken::new("SERVERBUG");
/// `CLIENTBUG`
pub static CLIENT_BUG: KnownToken = KnownToken::new("CLIENTBUG");
/// `CANNOT`
pub static CANNOT: KnownToken = KnownToken::new("CANNOT");
/// `LIMIT`
pub static LIMIT: KnownToken = KnownToken::new("LIMIT");
/// `OVERQUOTA`
pub static OVER_QUOTA: KnownToken = KnownToken::new("OVERQUOTA");
/// `ALREADYEXISTS`
pub static ALREADY_EXISTS: KnownToken = KnownToken::new("ALREADYEXISTS");
/// `NONEXISTENT`
pub static NON_EXISTENT: KnownToken = KnownToken::new("NONEXISTENT");

// RFC 6154
/// `USEATTR`
pub static USE_ATTR: KnownToken = KnownToken::new("USEATTR");

/// Every canonical IMAP response code.
pub static ALL: [&KnownToken; 46] = [
    &ALERT,
    &BAD_CHARSET,
    &CAPABILITY,
    &PARSE,
    &PERMANENT_FLAGS,
    &READ_ONLY,
    &READ_WRITE,
    &TRY_CREATE,
    &UIDNEXT,
    &UIDVALIDITY,
    &UNSEEN,
    &REFERRAL,
    &UNKNOWN_CTE,
    &APPEND_UID,
    &COPY_UID,
    &UID_NOT_STICKY,
    &HIGHEST_MOD_SEQ,
    &NO_MOD_SEQ,
    &MODIFIED,
    &COMPRESSION_ACTIVE,
    &NOT_SAVED,
    &BAD_COMPARATOR,
    &METADATA,
    &METADATA_LONG_ENTRIES,
    &METADATA_MAX_SIZE,
    &METADATA_TOO_MANY,
    &METADATA_NO_PRIVATE,
    &UNDEFINED_FILTER,
    &UNAVAILABLE,
    &AUTHENTICATION_FAILED,
    &AUTHORIZATION_FAILED,
    &EXPIRED,
    &PRIVACY_REQUIRED,
    &CONTACT_ADMIN,
    &NO_PERM,
    &IN_USE,
    &EXPUNGE_ISSUED,
    &CORRUPTION,
    &SERVER_BUG,
    &CLIENT_BUG,
    &CANNOT,
    &LIMIT,
    &OVER_QUOTA,
    &ALREADY_EXISTS,
    &NON_EXISTENT,
    &USE_ATTR,
];

// POP3, RFC 2449 and RFC 3206
/// `IN-USE`
pub static POP3_IN_USE: KnownToken = KnownToken::new("IN-USE");
/// `LOGIN-DELAY`
pub static POP3_LOGIN_DELAY: KnownToken = KnownToken::new("LOGIN-DELAY");
/// `SYS/TEMP`
pub static POP3_SYS_TEMP: KnownToken = KnownToken::new("SYS/TEMP");
/// `SYS/PERM`
pub static POP3_SYS_PERM: KnownToken = KnownToken::new("SYS/PERM");
/// `AUTH`
pub static POP3_AUTH: KnownToken = KnownToken::new("AUTH");

/// Every canonical POP3 response code.
pub static POP3_ALL: [&KnownToken; 5] = [
    &POP3_IN_USE,
    &POP3_LOGIN_DELAY,
    &POP3_SYS_TEMP,
    &POP3_SYS_PERM,
    &POP3_AUTH,
];
