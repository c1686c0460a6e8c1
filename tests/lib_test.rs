//! Library integration tests.

use pagecache::PageCacheError;

#[test]
fn error_types_are_public() {
    let err = PageCacheError::InvalidUri {
        uri: "/../x".into(),
        message: "parent segment".into(),
    };
    assert!(err.to_string().contains("/../x"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pagecache::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pagecache::cli::{Cli, Commands};

    let cli = Cli::parse_from(["pagecache", "info", "--json"]);

    if let Commands::Info(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Info command");
    }
}

#[test]
fn request_traits_can_be_implemented_by_hosts() {
    use pagecache::storage::MemoryStorage;
    use pagecache::{PageCache, Request, Response};
    use std::path::Path;

    struct HostRequest {
        uri: &'static str,
    }

    impl Request for HostRequest {
        fn method(&self) -> &str {
            "GET"
        }

        fn query_string(&self) -> Option<&str> {
            None
        }

        fn path_info(&self) -> &str {
            self.uri
        }
    }

    struct HostResponse(Vec<u8>);

    impl Response for HostResponse {
        fn status_code(&self) -> u16 {
            200
        }

        fn content(&self) -> &[u8] {
            &self.0
        }
    }

    let cache = PageCache::new(MemoryStorage::new()).with_base_path("/srv/cache");
    cache
        .cache_if_needed(&HostRequest { uri: "/docs/intro" }, &HostResponse(b"intro".to_vec()))
        .unwrap();

    assert_eq!(
        cache
            .storage()
            .file(Path::new("/srv/cache/docs/intro.html"))
            .unwrap(),
        b"intro"
    );
}
