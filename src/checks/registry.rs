//! Tracked tool definitions.
//!
//! Each tracked toolchain is described declaratively: how to ask it for its
//! installed version, how to parse that output, where its latest release is
//! published, and what command fixes an outdated install. The checker
//! evaluates these definitions; adding a tool means adding a row here.

/// How to parse the installed version out of a version command's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstalledProbe {
    /// The trimmed stdout is the version token (`node -v` → `v20.1.0`).
    Stdout,
    /// The Nth whitespace field (`rustc --version` → `rustc 1.80.0 (...)`).
    Field(usize),
    /// The first `x.y.z` token anywhere in the output.
    SemVer,
}

/// Where a tool's latest version comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestSource {
    /// A local command printing an ordered listing; the newest entry is the
    /// first field of the last non-empty line.
    Listing {
        program: &'static str,
        args: &'static [&'static str],
    },
    /// The tag name of the latest GitHub release of `owner/repo`.
    GithubRelease { repo: &'static str },
}

/// A helper tool a check depends on (presence only, never versioned).
#[derive(Debug, PartialEq, Eq)]
pub struct ManagerDef {
    /// Short name (e.g. "fnm").
    pub name: &'static str,
    /// Human-readable name for messages.
    pub display_name: &'static str,
    /// Command proving the helper is installed.
    pub version_command: (&'static str, &'static [&'static str]),
    /// Advisory lines shown when the helper is absent.
    pub advisory: &'static [&'static str],
}

/// A tracked toolchain.
#[derive(Debug, PartialEq, Eq)]
pub struct ToolDef {
    /// Short name used for --only/--skip selection.
    pub name: &'static str,
    /// Human-readable name for messages.
    pub display_name: &'static str,
    /// Command that reports the installed version.
    pub version_command: (&'static str, &'static [&'static str]),
    /// How to parse the installed version out of that command's output.
    pub probe: InstalledProbe,
    /// Where the latest version comes from.
    pub latest: LatestSource,
    /// Qualifier for "the latest" in messages (e.g. "LTS version").
    pub latest_label: Option<&'static str>,
    /// Command string that brings the tool up to date.
    pub remediation: &'static str,
    /// Helper that must be present before the latest version can be looked up.
    pub manager: Option<&'static ManagerDef>,
}

/// Fast Node Manager, used to list and switch Node.js releases.
pub static FNM: ManagerDef = ManagerDef {
    name: "fnm",
    display_name: "Fast Node Manager",
    version_command: ("fnm", &["--version"]),
    advisory: &[
        "It is recommended to use fnm to manage and switch Node.js versions.",
        "Install: https://github.com/Schniz/fnm#installation",
    ],
};

/// The tracked toolchains, in reporting order.
static TOOL_DEFS: &[ToolDef] = &[
    ToolDef {
        name: "node",
        display_name: "Node.js",
        version_command: ("node", &["-v"]),
        probe: InstalledProbe::Stdout,
        latest: LatestSource::Listing {
            program: "fnm",
            args: &["list-remote", "--lts"],
        },
        latest_label: Some("LTS version"),
        remediation: "fnm install --lts && fnm default lts-latest",
        manager: Some(&FNM),
    },
    ToolDef {
        name: "deno",
        display_name: "Deno",
        version_command: ("deno", &["--version"]),
        probe: InstalledProbe::SemVer,
        latest: LatestSource::GithubRelease {
            repo: "denoland/deno",
        },
        latest_label: None,
        remediation: "deno upgrade",
        manager: None,
    },
    ToolDef {
        name: "rust",
        display_name: "Rust",
        version_command: ("rustc", &["--version"]),
        probe: InstalledProbe::Field(1),
        latest: LatestSource::GithubRelease {
            repo: "rust-lang/rust",
        },
        latest_label: None,
        remediation: "rustup update",
        manager: None,
    },
];

/// All tracked tools, in the fixed reporting order.
pub fn tools() -> &'static [ToolDef] {
    TOOL_DEFS
}

/// Look up a tool definition by its short name.
pub fn find(name: &str) -> Option<&'static ToolDef> {
    TOOL_DEFS.iter().find(|t| t.name == name)
}
