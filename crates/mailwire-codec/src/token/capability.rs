//! Canonical capabilities.
//!
//! `AUTH=<mechanism>` capabilities are not registered; they are synthesized
//! on lookup like any other unknown name.

use super::KnownToken;

/// `IMAP4`
pub static IMAP4: KnownToken = KnownToken::new("IMAP4");
/// `IMAP4rev1`
pub static IMAP4REV1: KnownToken = KnownToken::new("IMAP4rev1");
/// `IMAP4rev2`
pub static IMAP4REV2: KnownToken = KnownToken::new("IMAP4rev2");
/// `QUOTA`
pub static QUOTA: KnownToken = KnownToken::new("QUOTA");
/// `LITERAL+`
pub static LITERAL_PLUS: KnownToken = KnownToken::new("LITERAL+");
/// `LITERAL-`
pub static LITERAL_MINUS: KnownToken = KnownToken::new("LITERAL-");
/// `IDLE`
pub static IDLE: KnownToken = KnownToken::new("IDLE");
/// `MAILBOX-REFERRALS`
pub static MAILBOX_REFERRALS: KnownToken = KnownToken::new("MAILBOX-REFERRALS");
/// `LOGIN-REFERRALS`
pub static LOGIN_REFERRALS: KnownToken = KnownToken::new("LOGIN-REFERRALS");
/// `NAMESPACE`
pub static NAMESPACE: KnownToken = KnownToken::new("NAMESPACE");
/// `STARTTLS`
pub static STARTTLS: KnownToken = KnownToken::new("STARTTLS");
/// `LOGINDISABLED`
pub static LOGIN_DISABLED: KnownToken = KnownToken::new("LOGINDISABLED");
/// `ID`
pub static ID: KnownToken = KnownToken::new("ID");
/// `CHILDREN`
pub static CHILDREN: KnownToken = KnownToken::new("CHILDREN");
/// `MULTIAPPEND`
pub static MULTIAPPEND: KnownToken = KnownToken::new("MULTIAPPEND");
/// `BINARY`
pub static BINARY: KnownToken = KnownToken::new("BINARY");
/// `UNSELECT`
pub static UNSELECT: KnownToken = KnownToken::new("UNSELECT");
/// `ACL`
pub static ACL: KnownToken = KnownToken::new("ACL");
/// `UIDPLUS`
pub static UIDPLUS: KnownToken = KnownToken::new("UIDPLUS");
/// `URLAUTH`
pub static URLAUTH: KnownToken = KnownToken::new("URLAUTH");
/// `CATENATE`
pub static CATENATE: KnownToken = KnownToken::new("CATENATE");
/// `CONDSTORE`
pub static CONDSTORE: KnownToken = KnownToken::new("CONDSTORE");
/// `ESEARCH`
pub static ESEARCH: KnownToken = KnownToken::new("ESEARCH");
/// `SASL-IR`
pub static SASL_IR: KnownToken = KnownToken::new("SASL-IR");
/// `COMPRESS=DEFLATE`
pub static COMPRESS_DEFLATE: KnownToken = KnownToken::new("COMPRESS=DEFLATE");
/// `WITHIN`
pub static WITHIN: KnownToken = KnownToken::new("WITHIN");
/// `ENABLE`
pub static ENABLE: KnownToken = KnownToken::new("ENABLE");
/// `QRESYNC`
pub static QRESYNC: KnownToken = KnownToken::new("QRESYNC");
/// `SEARCHRES`
pub static SEARCHRES: KnownToken = KnownToken::new("SEARCHRES");
/// `I18NLEVEL=1`
pub static I18NLEVEL_1: KnownToken = KnownToken::new("I18NLEVEL=1");
/// `I18NLEVEL=2`
pub static I18NLEVEL_2: KnownToken = KnownToken::new("I18NLEVEL=2");
/// `LANGUAGE`
pub static LANGUAGE: KnownToken = KnownToken::new("LANGUAGE");
/// `SORT`
pub static SORT: KnownToken = KnownToken::new("SORT");
/// `SORT=DISPLAY`
pub static SORT_DISPLAY: KnownToken = KnownToken::new("SORT=DISPLAY");
/// `THREAD=ORDEREDSUBJECT`
pub static THREAD_ORDEREDSUBJECT: KnownToken = KnownToken::new("THREAD=ORDEREDSUBJECT");
/// `THREAD=REFERENCES`
pub static THREAD_REFERENCES: KnownToken = KnownToken::new("THREAD=REFERENCES");
/// `THREAD=REFS`
pub static THREAD_REFS: KnownToken = KnownToken::new("THREAD=REFS");
/// `LIST-EXTENDED`
pub static LIST_EXTENDED: KnownToken = KnownToken::new("LIST-EXTENDED");
/// `LIST-STATUS`
pub static LIST_STATUS: KnownToken = KnownToken::new("LIST-STATUS");
/// `CONTEXT=SEARCH`
pub static CONTEXT_SEARCH: KnownToken = KnownToken::new("CONTEXT=SEARCH");
/// `CONTEXT=SORT`
pub static CONTEXT_SORT: KnownToken = KnownToken::new("CONTEXT=SORT");
/// `ESORT`
pub static ESORT: KnownToken = KnownToken::new("ESORT");
/// `METADATA`
pub static METADATA: KnownToken = KnownToken::new("METADATA");
/// `METADATA-SERVER`
pub static METADATA_SERVER: KnownToken = KnownToken::new("METADATA-SERVER");
/// `NOTIFY`
pub static NOTIFY: KnownToken = KnownToken::new("NOTIFY");
/// `FILTERS`
pub static FILTERS: KnownToken = KnownToken::new("FILTERS");
/// `URLAUTH=BINARY`
pub static URLAUTH_BINARY: KnownToken = KnownToken::new("URLAUTH=BINARY");
/// `UTF8=ACCEPT`
pub static UTF8_ACCEPT: KnownToken = KnownToken::new("UTF8=ACCEPT");
/// `UTF8=ALL`
pub static UTF8_ALL: KnownToken = KnownToken::new("UTF8=ALL");
/// `UTF8=APPEND`
pub static UTF8_APPEND: KnownToken = KnownToken::new("UTF8=APPEND");
/// `UTF8=ONLY`
pub static UTF8_ONLY: KnownToken = KnownToken::new("UTF8=ONLY");
/// `UTF8=USER`
pub static UTF8_USER: KnownToken = KnownToken::new("UTF8=USER");
/// `SEARCH=INTHREAD`
pub static SEARCH_INTHREAD: KnownToken = KnownToken::new("SEARCH=INTHREAD");
/// `CREATE-SPECIAL-USE`
pub static CREATE_SPECIAL_USE: KnownToken = KnownToken::new("CREATE-SPECIAL-USE");
/// `SPECIAL-USE`
pub static SPECIAL_USE: KnownToken = KnownToken::new("SPECIAL-USE");
/// `MOVE`
pub static MOVE: KnownToken = KnownToken::new("MOVE");
/// `XLIST`
pub static XLIST: KnownToken = KnownToken::new("XLIST");
/// `X-GM-EXT-1`
pub static X_GM_EXT_1: KnownToken = KnownToken::new("X-GM-EXT-1");

/// Every canonical IMAP capability.
pub static ALL: [&KnownToken; 58] = [
    &IMAP4,
    &IMAP4REV1,
    &IMAP4REV2,
    &QUOTA,
    &LITERAL_PLUS,
    &LITERAL_MINUS,
    &IDLE,
    &MAILBOX_REFERRALS,
    &LOGIN_REFERRALS,
    &NAMESPACE,
    &STARTTLS,
    &LOGIN_DISABLED,
    &ID,
    &CHILDREN,
    &MULTIAPPEND,
    &BINARY,
    &UNSELECT,
    &ACL,
    &UIDPLUS,
    &URLAUTH,
    &CATENATE,
    &CONDSTORE,
    &ESEARCH,
    &SASL_IR,
    &COMPRESS_DEFLATE,
    &WITHIN,
    &ENABLE,
    &QRESYNC,
    &SEARCHRES,
    &I18NLEVEL_1,
    &I18NLEVEL_2,
    &LANGUAGE,
    &SORT,
    &SORT_DISPLAY,
    &THREAD_ORDEREDSUBJECT,
    &THREAD_REFERENCES,
    &THREAD_REFS,
    &LIST_EXTENDED,
    &LIST_STATUS,
    &CONTEXT_SEARCH,
    &CONTEXT_SORT,
    &ESORT,
    &METADATA,
    &METADATA_SERVER,
    &NOTIFY,
    &FILTERS,
    &URLAUTH_BINARY,
    &UTF8_ACCEPT,
    &UTF8_ALL,
    &UTF8_APPEND,
    &UTF8_ONLY,
    &UTF8_USER,
    &SEARCH_INTHREAD,
    &CREATE_SPECIAL_USE,
    &SPECIAL_USE,
    &MOVE,
    &XLIST,
    &X_GM_EXT_1,
];

// POP3, RFC 2449
/// `TOP`
pub static POP3_TOP: KnownToken = KnownToken::new("TOP");
/// `USER`
pub static POP3_USER: KnownToken = KnownToken::new("USER");
/// `SASL`
pub static POP3_SASL: KnownToken = KnownToken::new("SASL");
/// `RESP-CODES`
pub static POP3_RESP_CODES: KnownToken = KnownToken::new("RESP-CODES");
/// `LOGIN-DELAY`
pub static POP3_LOGIN_DELAY: KnownToken = KnownToken::new("LOGIN-DELAY");
/// `PIPELINING`
pub static POP3_PIPELINING: KnownToken = KnownToken::new("PIPELINING");
/// `EXPIRE`
pub static POP3_EXPIRE: KnownToken = KnownToken::new("EXPIRE");
/// `UIDL`
pub static POP3_UIDL: KnownToken = KnownToken::new("UIDL");
/// `IMPLEMENTATION`
pub static POP3_IMPLEMENTATION: KnownToken = KnownToken::new("IMPLEMENTATION");
/// `STLS`
pub static POP3_STLS: KnownToken = KnownToken::new("STLS");
/// `UTF8`
pub static POP3_UTF8: KnownToken = KnownToken::new("UTF8");

/// Every canonical POP3 capability.
pub static POP3_ALL: [&KnownToken; 11] = [
    &POP3_TOP,
    &POP3_USER,
    &POP3_SASL,
    &POP3_RESP_CODES,
    &POP3_LOGIN_DELAY,
    &POP3_PIPELINING,
    &POP3_EXPIRE,
    &POP3_UIDL,
    &POP3_IMPLEMENTATION,
    &POP3_STLS,
    &POP3_UTF8,
];
