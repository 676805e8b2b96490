//! Named HCL documents shared by unit, integration and behaviour tests.
//!
//! Each [`Fixture`] pairs two inputs with the exact text a merge of them
//! must produce.

/// Two merge inputs and the expected merged output.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    /// Name used to refer to the fixture from behaviour scenarios.
    pub name: &'static str,
    /// Base document.
    pub a: &'static str,
    /// Overriding document.
    pub b: &'static str,
    /// Expected output of merging `a` with `b`.
    pub merged: &'static str,
}

/// Blocks with disjoint keys are concatenated.
pub const DISJOINT: Fixture = Fixture {
    name: "disjoint",
    a: r#"variable "a" {
  type        = string
  description = "Variable A"
  default     = "a"
}"#,
    b: r#"variable "b" {
  type        = string
  description = "Variable B"
  default     = "b"
}"#,
    merged: r#"variable "a" {
  type        = string
  description = "Variable A"
  default     = "a"
}

variable "b" {
  type        = string
  description = "Variable B"
  default     = "b"
}
"#,
};

/// A shared block takes B's values and keeps attributes unique to either side.
pub const OVERRIDE: Fixture = Fixture {
    name: "override",
    a: r#"variable "a" {
  type        = string
  description = "Variable A"
  override    = false
  a					  = "a"
}"#,
    b: r#"variable "a" {
  type        = string
  description = "Variable A"
  override    = true
	b           = "b"
}"#,
    merged: r#"variable "a" {
  a           = "a"
  description = "Variable A"
  override    = true
  type        = string
  b           = "b"
}
"#,
};

/// Nested blocks merge with the same rule as top-level blocks.
pub const NESTED: Fixture = Fixture {
    name: "nested",
    a: r#"monitor "a" {
  description = "Monitor A"

  threshold {
    critical = 90
    warning = 80
  }
}"#,
    b: r#"monitor "a" {
  description = "Monitor A"

  threshold {
    critical = 100
    recovery = 10
  }
}"#,
    merged: r#"monitor "a" {
  description = "Monitor A"

  threshold {
    critical = 100
    warning  = 80
    recovery = 10
  }
}
"#,
};

/// An empty base document yields the overriding document.
pub const EMPTY_BASE: Fixture = Fixture {
    name: "empty_base",
    a: "",
    b: r#"variable "b" {
  type        = string
  description = "Variable B"
  default     = "b"
}"#,
    merged: r#"variable "b" {
  type        = string
  description = "Variable B"
  default     = "b"
}
"#,
};

/// A module-style variable override, as produced when layering a module's
/// defaults with environment-specific values.
pub const MODULE_DEFAULTS: Fixture = Fixture {
    name: "module_defaults",
    a: r#"
variable "name" {
  description = "Name to be used on all the resources as identifier"
  type        = string
  default     = ""
}

variable "tags" {
  type    = map(string)
  default = {}
}"#,
    b: r#"
variable "name" {
  type    = string
  default = "my-name"
}

variable "region" {
  type = string
}"#,
    merged: r#"variable "name" {
  default     = "my-name"
  description = "Name to be used on all the resources as identifier"
  type        = string
}

variable "tags" {
  type    = map(string)
  default = {}
}

variable "region" {
  type = string
}
"#,
};

/// Every fixture, in declaration order.
pub const ALL: [Fixture; 5] = [DISJOINT, OVERRIDE, NESTED, EMPTY_BASE, MODULE_DEFAULTS];

/// Look up a fixture by [`Fixture::name`].
#[must_use]
pub fn by_name(name: &str) -> Option<Fixture> {
    ALL.into_iter().find(|fixture| fixture.name == name)
}
