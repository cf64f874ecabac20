//! Ordered lookup tables driving the heuristic stages.
//!
//! Every table is a plain slice evaluated front to back. Where a stage stops
//! at the first hit, the position of an entry is its priority, so more
//! specific entries must come before generic ones.
//!
//! Keyword matching is done by [`contains_phrase`]: a phrase matches when it
//! starts at a word boundary, so `pay` matches "payment" but not "display".

use crate::models::ElementType;

/// A canned user story selected by trigger keywords.
#[derive(Debug, Clone, Copy)]
pub struct DomainContext {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub actor: &'static str,
    pub action: &'static str,
    pub benefit: &'static str,
}

impl DomainContext {
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| contains_phrase(lower, k))
    }
}

/// Domain contexts in priority order.
///
/// Payroll comes first because its vocabulary ("menu", "run") overlaps the
/// generic navigation context at the bottom. Authentication and registration
/// precede search and forms because login pages are forms too. Navigation is
/// last: nearly every narrative mentions clicking something.
pub const DOMAIN_CONTEXTS: &[DomainContext] = &[
    DomainContext {
        name: "payroll",
        keywords: &["payroll", "run payroll", "payroll menu", "salary", "wages", "pay"],
        actor: "HR administrator",
        action: "process payroll operations",
        benefit: "ensure employees are paid accurately and on time",
    },
    DomainContext {
        name: "authentication",
        keywords: &["login", "log in", "sign in", "authenticate", "password"],
        actor: "registered user",
        action: "log into my account",
        benefit: "access my personal dashboard and account features",
    },
    DomainContext {
        name: "registration",
        keywords: &["register", "sign up", "create account", "new user"],
        actor: "new user",
        action: "create an account",
        benefit: "access the platform's features and services",
    },
    DomainContext {
        name: "search",
        keywords: &["search", "find", "lookup", "query"],
        actor: "user",
        action: "search for information",
        benefit: "quickly find what I'm looking for",
    },
    DomainContext {
        name: "purchase",
        keywords: &["purchase", "buy", "order", "checkout", "cart"],
        actor: "customer",
        action: "complete a purchase",
        benefit: "buy the products I need",
    },
    DomainContext {
        name: "forms",
        keywords: &["form", "submit", "data entry", "input"],
        actor: "user",
        action: "fill out and submit a form",
        benefit: "provide the required information",
    },
    DomainContext {
        name: "catalog",
        keywords: &["plp", "product list", "products", "catalog"],
        actor: "customer",
        action: "browse and view products",
        benefit: "find products that meet my needs",
    },
    DomainContext {
        name: "employees",
        keywords: &["employee", "staff", "add user", "manage"],
        actor: "administrator",
        action: "manage employee information",
        benefit: "maintain accurate records",
    },
    DomainContext {
        name: "navigation",
        keywords: &["menu", "navigate", "home page", "click"],
        actor: "user",
        action: "navigate through the application",
        benefit: "access different features and functionalities",
    },
];

/// A selector template fired by trigger keywords.
#[derive(Debug, Clone, Copy)]
pub struct LocatorRule {
    pub keywords: &'static [&'static str],
    pub selector: &'static str,
    pub name: &'static str,
    pub element: ElementType,
}

impl LocatorRule {
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| contains_phrase(lower, k))
    }
}

/// Locator rules in output order. Every matching rule contributes a locator.
pub const LOCATOR_RULES: &[LocatorRule] = &[
    LocatorRule {
        keywords: &["payroll menu", "payroll"],
        selector: "getByRole('link', { name: /payroll/i })",
        name: "payrollMenuLink",
        element: ElementType::Link,
    },
    LocatorRule {
        keywords: &["run payroll", "payroll button"],
        selector: "getByRole('button', { name: /run payroll/i })",
        name: "runPayrollButton",
        element: ElementType::Button,
    },
    LocatorRule {
        keywords: &["home page", "home", "back"],
        selector: "getByRole('link', { name: /home/i })",
        name: "homeLink",
        element: ElementType::Link,
    },
    LocatorRule {
        keywords: &["username", "user name", "login", "log in", "email"],
        selector: "getByLabel('Username')",
        name: "usernameInput",
        element: ElementType::Input,
    },
    LocatorRule {
        keywords: &["password", "pwd"],
        selector: "getByLabel('Password')",
        name: "passwordInput",
        element: ElementType::Input,
    },
    LocatorRule {
        keywords: &["login", "log in", "sign in", "submit"],
        selector: "getByRole('button', { name: /login|sign in/i })",
        name: "loginButton",
        element: ElementType::Button,
    },
    LocatorRule {
        keywords: &["search", "find"],
        selector: "getByPlaceholder('Search')",
        name: "searchInput",
        element: ElementType::Input,
    },
    LocatorRule {
        keywords: &["menu", "navigation"],
        selector: "getByRole('navigation')",
        name: "mainNavigation",
        element: ElementType::Navigation,
    },
    LocatorRule {
        keywords: &["product", "item", "list"],
        selector: "getByRole('grid', { name: 'Products' })",
        name: "productList",
        element: ElementType::List,
    },
    LocatorRule {
        keywords: &["add", "create", "new"],
        selector: "getByRole('button', { name: /add|create|new/i })",
        name: "addButton",
        element: ElementType::Button,
    },
    LocatorRule {
        keywords: &["save", "update"],
        selector: "getByRole('button', { name: /save|update/i })",
        name: "saveButton",
        element: ElementType::Button,
    },
    LocatorRule {
        keywords: &["cancel", "close"],
        selector: "getByRole('button', { name: /cancel|close/i })",
        name: "cancelButton",
        element: ElementType::Button,
    },
];

/// A topical tag fired by trigger keywords.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
}

/// Functional tags followed by priority tags.
pub const TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: "authentication",
        keywords: &["login", "log in", "sign in", "password", "auth"],
    },
    TagRule {
        tag: "registration",
        keywords: &["register", "sign up", "create account"],
    },
    TagRule {
        tag: "search",
        keywords: &["search", "find", "query"],
    },
    TagRule {
        tag: "ecommerce",
        keywords: &["purchase", "buy", "cart", "checkout"],
    },
    TagRule {
        tag: "navigation",
        keywords: &["menu", "navigate", "link"],
    },
    TagRule {
        tag: "forms",
        keywords: &["form", "input", "submit"],
    },
    TagRule {
        tag: "crud",
        keywords: &["create", "read", "update", "delete", "add", "edit"],
    },
    TagRule {
        tag: "admin",
        keywords: &["admin", "management", "employee"],
    },
    TagRule {
        tag: "critical",
        keywords: &["critical", "important"],
    },
    TagRule {
        tag: "smoke",
        keywords: &["smoke", "basic"],
    },
];

/// A scenario name chosen by topic keywords.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTopic {
    pub keywords: &'static [&'static str],
    pub name: &'static str,
}

/// Topics recognized in the dominant action step.
pub const STEP_TOPICS: &[ScenarioTopic] = &[
    ScenarioTopic {
        keywords: &["payroll"],
        name: "Process payroll workflow",
    },
    ScenarioTopic {
        keywords: &["menu", "navigate"],
        name: "Navigate and interact with application features",
    },
    ScenarioTopic {
        keywords: &["fill", "enter"],
        name: "Complete data entry workflow",
    },
];

/// Topics recognized in the whole source text when no step qualified.
pub const TEXT_TOPICS: &[ScenarioTopic] = &[
    ScenarioTopic {
        keywords: &["payroll"],
        name: "Process payroll workflow",
    },
    ScenarioTopic {
        keywords: &["login", "log in", "sign in"],
        name: "User successfully logs into their account",
    },
    ScenarioTopic {
        keywords: &["register", "sign up"],
        name: "New user successfully creates an account",
    },
    ScenarioTopic {
        keywords: &["search", "find"],
        name: "User searches for information",
    },
    ScenarioTopic {
        keywords: &["purchase", "buy", "checkout"],
        name: "Customer completes a purchase",
    },
    ScenarioTopic {
        keywords: &["form", "submit"],
        name: "User successfully submits a form",
    },
    ScenarioTopic {
        keywords: &["employee", "add", "create"],
        name: "Administrator manages data successfully",
    },
];

/// Scenario name used when nothing else applies.
pub const GENERIC_SCENARIO_NAME: &str = "User completes the workflow successfully";

/// Prefixes marking a precondition.
pub const SETUP_PREFIXES: &[&str] = &["i am", "i'm", "i start", "i begin", "initially", "first"];

/// Prefixes marking an observable outcome. Checked before [`ACTION_PREFIXES`]
/// so that "I can see" is not taken for the capability "I can".
pub const VERIFICATION_PREFIXES: &[&str] = &[
    "i see",
    "i should",
    "i expect",
    "i can see",
    "i verify",
    "i check",
    "i confirm",
];

/// Prefixes marking a UI action.
pub const ACTION_PREFIXES: &[&str] = &[
    "i click",
    "i select",
    "i enter",
    "i type",
    "i fill",
    "i navigate",
    "i go",
    "i press",
    "i choose",
    "i upload",
    "i download",
    "i provide",
    "i continue",
    "i can",
];

/// Prefixes that continue a preceding `When` step.
pub const CONTINUATION_PREFIXES: &[&str] = &["i can", "i upload", "i provide", "i review"];

/// Setup prefixes that survive the first-step demotion to `Given`.
pub const STARTING_PREFIXES: &[&str] = &["i am", "i start", "i begin"];

/// Action-intent vocabulary: navigation, interaction, perception and
/// confirmation words. A fragment without any of them is not a step.
pub const ACTION_WORDS: &[&str] = &[
    "log", "sign", "click", "tap", "press", "select", "choose", "enter", "type", "fill", "submit",
    "upload", "download", "provide", "continue", "review", "confirm", "verify", "check", "see",
    "view", "open", "navigate", "go to", "visit", "start", "begin", "search", "add", "save",
    "delete", "edit", "cancel", "close", "receive", "display", "appear", "redirect", "run",
];

/// Fragments describing where the user is count as actionable setup.
pub const STATE_PREFIXES: &[&str] = &[
    "i am on", "i am at", "i am in", "i am logged", "i am signed", "i am viewing", "i'm on",
    "i'm at", "i'm in", "i'm logged",
];

/// Noun phrases that are list items, never steps on their own.
pub const BARE_NOUNS: &[&str] = &[
    "company name",
    "address",
    "contact",
    "bank statements",
    "tax returns",
    "documents",
];

/// Bare imperative verbs that receive an "I" subject.
pub const IMPERATIVE_VERBS: &[&str] = &[
    "click", "tap", "press", "select", "choose", "enter", "type", "fill", "submit", "upload",
    "download", "provide", "continue", "review", "confirm", "verify", "check", "open",
    "navigate", "go", "visit", "search", "add", "save", "delete", "edit", "cancel", "close",
    "log", "sign", "start", "begin", "see", "view", "run",
];

/// Third-person verb forms and their first-person base forms.
pub const VERB_FORMS: &[(&str, &str)] = &[
    ("is", "am"),
    ("has", "have"),
    ("logs", "log"),
    ("signs", "sign"),
    ("continues", "continue"),
    ("provides", "provide"),
    ("uploads", "upload"),
    ("downloads", "download"),
    ("reviews", "review"),
    ("clicks", "click"),
    ("taps", "tap"),
    ("presses", "press"),
    ("selects", "select"),
    ("chooses", "choose"),
    ("enters", "enter"),
    ("types", "type"),
    ("fills", "fill"),
    ("submits", "submit"),
    ("navigates", "navigate"),
    ("goes", "go"),
    ("visits", "visit"),
    ("opens", "open"),
    ("sees", "see"),
    ("views", "view"),
    ("confirms", "confirm"),
    ("verifies", "verify"),
    ("checks", "check"),
    ("starts", "start"),
    ("begins", "begin"),
    ("searches", "search"),
    ("adds", "add"),
    ("saves", "save"),
    ("deletes", "delete"),
    ("edits", "edit"),
    ("cancels", "cancel"),
    ("closes", "close"),
    ("runs", "run"),
    ("receives", "receive"),
    ("completes", "complete"),
    ("wants", "want"),
    ("needs", "need"),
];

/// Persona names used in recorded narratives. Only these are rewritten to
/// "I" when they lead a sentence, so "Dialog closes" keeps its subject.
pub const NAMED_ACTORS: &[&str] = &["Alex"];

/// Third-person subjects rewritten to "I".
pub const SUBJECTS: &[&str] = &[
    "the user",
    "a user",
    "user",
    "the customer",
    "the visitor",
    "the administrator",
    "the admin",
];

/// Role nouns the enhanced annotator recognizes as actors, in priority order.
pub const ROLE_NOUNS: &[&str] = &[
    "customer",
    "administrator",
    "admin",
    "visitor",
    "manager",
    "user",
];

/// Extensions that mark a line as a file path when combined with `/`.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".txt", ".js", ".feature", ".md"];

/// Headers of structural Gherkin lines, never prose.
pub const STRUCTURAL_HEADERS: &[&str] = &["feature:", "scenario:", "given:", "when:", "then:"];

/// Misspellings repaired in step text.
pub const SPELLING_FIXES: &[(&str, &str)] = &[
    ("sucesfully", "successfully"),
    ("succesfully", "successfully"),
    ("laoded", "loaded"),
];

/// Returns true if `phrase` occurs in `lower` starting at a word boundary.
///
/// Both arguments are expected in lowercase.
pub fn contains_phrase(lower: &str, phrase: &str) -> bool {
    lower.match_indices(phrase).any(|(i, _)| {
        lower[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

/// Returns true if `lower` starts with `phrase` followed by a word boundary.
pub fn starts_with_phrase(lower: &str, phrase: &str) -> bool {
    lower.strip_prefix(phrase).map_or(false, |rest| {
        rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
    })
}

/// Returns the base form of a third-person verb.
pub fn base_form(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    VERB_FORMS
        .iter()
        .find(|(third, _)| *third == lower)
        .map(|(_, base)| *base)
}
