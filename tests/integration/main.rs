//! Integration tests for jarfetch

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::path::Path;
    use std::thread;
    use tempfile::TempDir;

    /// Command isolated from the user's config, cache and cwd manifest
    fn jarfetch(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("jarfetch");
        cmd.current_dir(dir)
            .env("JARFETCH_PLAIN", "1")
            .env("JARFETCH_CONFIG", dir.join("config.toml"))
            .env("JARFETCH_CACHE_DIR", dir.join("cache"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// Serve `body` to a single request on a loopback port
    fn serve_once(body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap_or(0) > 0 {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                stream.write_all(header.as_bytes()).unwrap();
                stream.write_all(body).unwrap();
            }
        });
        format!("http://{}/maven2", addr)
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Fetch Maven artifacts")
                    .or(predicate::str::contains("runtime dependency fetcher")),
            );
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("jarfetch"));
    }

    #[test]
    fn url_prints_download_location() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["url", "org.mongodb:mongo-java-driver:3.9.1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "http://repo1.maven.org/maven2/org/mongodb/mongo-java-driver/3.9.1/mongo-java-driver-3.9.1.jar",
            ));
    }

    #[test]
    fn url_rejects_bad_repository() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["url", "a.b:c:1@not a url"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid artifact URL"));
    }

    #[test]
    fn catalog_lists_known_entries() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["catalog", "-f", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("guava"));
    }

    #[test]
    fn fetch_downloads_and_prints_classpath() {
        let dir = TempDir::new().unwrap();
        let repo = serve_once(b"jar-bytes");
        let coordinate = format!("com.example:widget:1.0@{}", repo);

        let expected = dir.path().join("cache").join("widget-1.0.jar");
        jarfetch(dir.path())
            .args(["fetch", "--no-manifest", "-f", "plain", &coordinate])
            .assert()
            .success()
            .stdout(predicate::str::contains("widget-1.0.jar"));

        assert_eq!(fs::read(&expected).unwrap(), b"jar-bytes");
        assert!(!dir.path().join("cache").join("widget-1.0.jar.part").exists());

        // Second run is served from the cache; the server is gone
        jarfetch(dir.path())
            .args(["fetch", "--no-manifest", "-f", "plain", &coordinate])
            .assert()
            .success();
    }

    #[test]
    fn fetch_logs_progress_by_default() {
        let dir = TempDir::new().unwrap();
        let repo = serve_once(b"jar-bytes");
        let coordinate = format!("com.example:widget:1.0@{}", repo);

        jarfetch(dir.path())
            .args(["fetch", "--no-manifest", "-f", "plain", &coordinate])
            .assert()
            .success()
            .stderr(predicate::str::contains("Loading dependency"));
    }

    #[test]
    fn fetch_quiet_when_verbose_disabled() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[general]\nverbose = false\n").unwrap();
        let repo = serve_once(b"jar-bytes");
        let coordinate = format!("com.example:widget:1.0@{}", repo);

        jarfetch(dir.path())
            .args(["fetch", "--no-manifest", "-f", "plain", &coordinate])
            .assert()
            .success()
            .stderr(predicate::str::contains("Loading dependency").not());
    }

    #[test]
    fn fetch_rejects_path_escaping_coordinate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("outside-1.jar"), b"not in cache").unwrap();

        jarfetch(dir.path())
            .args(["fetch", "--no-manifest", "-f", "plain", "org.example:../outside:1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid artifact URL"));
    }

    #[test]
    fn fetch_unreachable_repository_fails() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args([
                "fetch",
                "--no-manifest",
                "-f",
                "plain",
                "com.example:widget:1.0@http://127.0.0.1:1/maven2",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unable to download dependency"));

        assert!(!dir.path().join("cache").join("widget-1.0.jar").exists());
    }

    #[test]
    fn fetch_reads_manifest_from_cwd() {
        let dir = TempDir::new().unwrap();
        let repo = serve_once(b"manifest-jar");
        fs::write(
            dir.path().join("jarfetch.toml"),
            format!(
                "repository = \"{}\"\n\n[[dependency]]\ngroup = \"com.example\"\nartifact = \"gadget\"\nversion = \"2.0\"\n",
                repo
            ),
        )
        .unwrap();

        jarfetch(dir.path())
            .args(["fetch", "-f", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gadget-2.0.jar"));
    }

    #[test]
    fn list_shows_missing_without_network() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["list", "--no-manifest", "com.example:widget:1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("missing"));

        assert!(!dir.path().join("cache").exists());
    }

    #[test]
    fn cache_path_uses_override() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["cache", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cache"));
    }

    #[test]
    fn cache_clear_empty() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["cache", "clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already empty"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[fetch]"));
    }

    #[test]
    fn config_set_then_show() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["config", "set", "fetch.timeout_secs", "30"])
            .assert()
            .success();

        jarfetch(dir.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("timeout_secs = 30"));
    }

    #[test]
    fn unknown_known_entry_fails() {
        let dir = TempDir::new().unwrap();
        jarfetch(dir.path())
            .args(["list", "--no-manifest", "--known", "left-pad"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown catalog entry"));
    }
}
