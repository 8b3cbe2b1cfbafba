/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    pub fn summary(&self) -> String {
        let Self {
            version,
            git_hash,
            git_status,
            target,
            profile,
        } = self;
        format!("beehive_core {version} ({git_hash} {git_status}, {target} {profile})")
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("BEEHIVE_CORE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("BEEHIVE_CORE_BUILD_STATUS").unwrap_or("unknown"),
        target: option_env!("BEEHIVE_CORE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("BEEHIVE_CORE_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_includes_version() {
        let metadata = current();
        assert!(metadata.summary().contains(env!("CARGO_PKG_VERSION")));
        assert!(["clean", "dirty", "unknown"].contains(&metadata.git_status));
    }

    #[test]
    fn summary_lists_every_field() {
        let metadata = BuildMetadata {
            version: "1.2.3",
            git_hash: "abc1234",
            git_status: "dirty",
            target: "x86_64-unknown-linux-gnu",
            profile: "release",
        };
        assert_eq!(
            metadata.summary(),
            "beehive_core 1.2.3 (abc1234 dirty, x86_64-unknown-linux-gnu release)"
        );
    }
}
