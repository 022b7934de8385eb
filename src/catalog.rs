//! Built-in catalog of commonly shipped-outside-the-jar dependencies
//!
//! Database drivers, bot frameworks and utility libraries that plugins tend
//! to load at runtime instead of shading. Entries can be referenced by name
//! from the command line (`--known guava`) or from a manifest.

use crate::coordinate::{Coordinate, DEFAULT_REPOSITORY};
use crate::error::FetchError;
use crate::manager::FetchManager;
use std::fmt;
use std::str::FromStr;

const JCENTER: &str = "http://jcenter.bintray.com/";
const JITPACK: &str = "https://jitpack.io";

/// Well-known dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownDependency {
    // Database drivers
    MongoJavaDriver,
    MongoMorphia,
    MariadbJavaClient,
    Jedis,
    // Discord bots
    Jda,
    Javacord,
    Discord4j,
    // Google
    Guice,
    Guava,
    // ASM
    Asm,
    AsmAnalysis,
    AsmCommons,
    AsmTree,
    AsmUtil,
    // Minecraft
    Commodore,
    AdvancementCreator,
}

impl KnownDependency {
    /// All entries in catalog order
    pub fn all() -> &'static [Self] {
        &[
            Self::MongoJavaDriver,
            Self::MongoMorphia,
            Self::MariadbJavaClient,
            Self::Jedis,
            Self::Jda,
            Self::Javacord,
            Self::Discord4j,
            Self::Guice,
            Self::Guava,
            Self::Asm,
            Self::AsmAnalysis,
            Self::AsmCommons,
            Self::AsmTree,
            Self::AsmUtil,
            Self::Commodore,
            Self::AdvancementCreator,
        ]
    }

    /// Catalog name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Self::MongoJavaDriver => "mongo-java-driver",
            Self::MongoMorphia => "morphia",
            Self::MariadbJavaClient => "mariadb-java-client",
            Self::Jedis => "jedis",
            Self::Jda => "jda",
            Self::Javacord => "javacord",
            Self::Discord4j => "discord4j",
            Self::Guice => "guice",
            Self::Guava => "guava",
            Self::Asm => "asm",
            Self::AsmAnalysis => "asm-analysis",
            Self::AsmCommons => "asm-commons",
            Self::AsmTree => "asm-tree",
            Self::AsmUtil => "asm-util",
            Self::Commodore => "commodore",
            Self::AdvancementCreator => "advancement-creator",
        }
    }

    /// (group, artifact, version, repository)
    fn parts(&self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::MongoJavaDriver => ("org.mongodb", "mongo-java-driver", "3.9.1", DEFAULT_REPOSITORY),
            Self::MongoMorphia => ("org.mongodb", "morphia", "1.3.2", DEFAULT_REPOSITORY),
            Self::MariadbJavaClient => {
                ("org.mariadb.jdbc", "mariadb-java-client", "2.4.3", DEFAULT_REPOSITORY)
            }
            Self::Jedis => ("redis.clients", "jedis", "3.1.0", DEFAULT_REPOSITORY),
            Self::Jda => ("net.dv8tion", "jda", "4.0.0_46", JCENTER),
            Self::Javacord => ("org.javacord", "javacord", "3.0.4", DEFAULT_REPOSITORY),
            Self::Discord4j => ("com.discord4j", "discord4j-core", "3.0.8", DEFAULT_REPOSITORY),
            Self::Guice => ("com.google.inject", "guice", "4.0.0", DEFAULT_REPOSITORY),
            Self::Guava => ("com.google.guava", "guava", "28.1-jre", DEFAULT_REPOSITORY),
            Self::Asm => ("org.ow2.asm", "asm", "7.0", DEFAULT_REPOSITORY),
            Self::AsmAnalysis => ("org.ow2.asm", "asm-analysis", "7.0", DEFAULT_REPOSITORY),
            Self::AsmCommons => ("org.ow2.asm", "asm-commons", "7.0", DEFAULT_REPOSITORY),
            Self::AsmTree => ("org.ow2.asm", "asm-tree", "7.0", DEFAULT_REPOSITORY),
            Self::AsmUtil => ("org.ow2.asm", "asm-util", "7.0", DEFAULT_REPOSITORY),
            Self::Commodore => ("me.lucko", "commodore", "1.3", DEFAULT_REPOSITORY),
            Self::AdvancementCreator => {
                ("com.github.Trigary", "AdvancementCreator", "v2.0", JITPACK)
            }
        }
    }

    /// The entry as a coordinate
    pub fn coordinate(&self) -> Coordinate {
        let (group, artifact, version, repository) = self.parts();
        Coordinate::from_static(group, artifact, version, repository)
    }

    /// Queue this entry on a manager
    pub fn append(&self, manager: &mut FetchManager) {
        manager.register(self.coordinate());
    }
}

impl fmt::Display for KnownDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for KnownDependency {
    type Err = FetchError;

    /// Case-insensitive; `_` and `-` are interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| FetchError::UnknownCatalogEntry(s.to_string()))
    }
}
