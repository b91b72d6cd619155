//! Gradle build files.
//!
//! Each template is rendered through [`RenderContext`]; see its docs for the
//! variables in scope.

use super::RenderContext;

pub const WRAPPER_PROPERTIES_PATH: &str = "gradle/wrapper/gradle-wrapper.properties";
pub const SETTINGS_PATH: &str = "settings.gradle";
pub const BUILD_PATH: &str = "build.gradle";
pub const PROPERTIES_PATH: &str = "gradle.properties";

const WRAPPER_PROPERTIES: &str = r"distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
distributionUrl=https\://services.gradle.org/distributions/gradle-{{GRADLE_VERSION}}-bin.zip
networkTimeout=10000
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
";

const SETTINGS_GRADLE: &str = "pluginManagement {
    repositories {
        maven {
            url = uri('https://maven.fabricmc.net/')
            name = 'Fabric'
        }
        gradlePluginPortal()
        mavenCentral()
    }
}

rootProject.name = '{{MOD_ID}}'
";

const BUILD_GRADLE: &str = r#"plugins {
    id 'fabric-loom' version '{{LOOM_VERSION}}'
    id 'java'
    id 'java-library'
}

base.archivesName = project.name
version = "{{MOD_VERSION}}"
group = "{{GROUP}}"

repositories {
    maven { url = uri("https://maven.fabricmc.net/") }
    mavenCentral()
    maven { url = uri("https://api.modrinth.com/maven") }
}

dependencies {
    minecraft "com.mojang:minecraft:{{MINECRAFT_VERSION}}"
    mappings "net.fabricmc:yarn:{{YARN_MAPPINGS}}"
    modImplementation "net.fabricmc:fabric-loader:{{LOADER_VERSION}}"
    modImplementation "net.fabricmc.fabric-api:fabric-api:{{FABRIC_API_VERSION}}"
}

java {
    toolchain {
        languageVersion = JavaLanguageVersion.of({{JAVA_VERSION}})
        vendor = JvmVendorSpec.ADOPTIUM
    }
    sourceCompatibility = JavaVersion.VERSION_{{JAVA_VERSION}}
    targetCompatibility = JavaVersion.VERSION_{{JAVA_VERSION}}
}

tasks.withType(JavaCompile).configureEach {
    it.options.encoding = "UTF-8"
    it.options.release = {{JAVA_VERSION}}
}

tasks.withType(JavaExec).configureEach {
    javaLauncher = javaToolchains.launcherFor {
        languageVersion = JavaLanguageVersion.of({{JAVA_VERSION}})
    }
}
"#;

const GRADLE_PROPERTIES: &str = "org.gradle.jvmargs=-Xmx3G -XX:MaxMetaspaceSize=1G
org.gradle.daemon=false
org.gradle.parallel=true
org.gradle.caching=true

# Java toolchain
java.toolchain.languageVersion={{JAVA_VERSION}}
java.toolchain.vendor=ADOPTIUM
";

/// All four Gradle files as `(relative path, content)`, in write order.
pub fn render_all(ctx: &RenderContext) -> [(&'static str, String); 4] {
    [
        (WRAPPER_PROPERTIES_PATH, ctx.render(WRAPPER_PROPERTIES)),
        (SETTINGS_PATH, ctx.render(SETTINGS_GRADLE)),
        (BUILD_PATH, ctx.render(BUILD_GRADLE)),
        (PROPERTIES_PATH, ctx.render(GRADLE_PROPERTIES)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::ModConfiguration, resolver::VersionResolver};

    fn rendered(version: &str) -> Vec<(&'static str, String)> {
        let config = ModConfiguration::builder("Example Mod", "examplemod")
            .platform_version(version)
            .group("com.example")
            .build()
            .unwrap();
        let bundle = VersionResolver::new()
            .resolve(config.target_platform_version())
            .unwrap();
        render_all(&RenderContext::for_project(&config, &bundle)).to_vec()
    }

    #[test]
    fn no_placeholder_survives() {
        for (path, content) in rendered("1.21.4") {
            assert!(!content.contains("{{"), "{path} still has a placeholder");
        }
    }

    #[test]
    fn build_gradle_pins_resolved_versions() {
        let files = rendered("1.19.2");
        let build = &files[2].1;
        assert!(build.contains("id 'fabric-loom' version '0.10.2'"));
        assert!(build.contains("minecraft \"com.mojang:minecraft:1.19.2\""));
        assert!(build.contains("net.fabricmc:yarn:1.19.2+build.1:v2"));
        assert!(build.contains("fabric-api:0.57.0+1.19.2"));
        assert!(build.contains("JavaLanguageVersion.of(17)"));
        assert!(build.contains("group = \"com.example\""));
    }

    #[test]
    fn placeholder_text_in_values_is_written_verbatim() {
        let config = ModConfiguration::builder("Example Mod", "examplemod")
            .group("com.{{MOD_ID}}")
            .version("{{JAVA_VERSION}}-beta")
            .build()
            .unwrap();
        let bundle = VersionResolver::new()
            .resolve(config.target_platform_version())
            .unwrap();
        let files = render_all(&RenderContext::for_project(&config, &bundle));
        let build = &files[2].1;
        assert!(build.contains("group = \"com.{{MOD_ID}}\""));
        assert!(build.contains("version = \"{{JAVA_VERSION}}-beta\""));
    }

    #[test]
    fn wrapper_and_settings() {
        let files = rendered("1.21.4");
        assert_eq!(files[0].0, WRAPPER_PROPERTIES_PATH);
        assert!(files[0].1.contains("gradle-8.10-bin.zip"));
        assert!(files[1].1.contains("rootProject.name = 'examplemod'"));
        assert!(files[3].1.contains("java.toolchain.languageVersion=21"));
    }
}
