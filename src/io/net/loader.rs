use super::reader::{self, NetEntry};
use crate::io::error::Error;
use crate::model::network::Network;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locates network files by name and expands their includes.
#[derive(Debug, Clone, Default)]
pub struct NetLoader {
    search_dirs: Vec<PathBuf>,
}

impl NetLoader {
    pub fn new<I, P>(search_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_dirs: search_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Searches the networks shipped under a MESA installation,
    /// `$MESA_DIR/data/net_data/nets`.
    pub fn from_mesa_dir(mesa_dir: impl AsRef<Path>) -> Self {
        Self::new([mesa_dir.as_ref().join("data").join("net_data").join("nets")])
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Loads the network `name` (with or without its `.net` extension),
    /// following includes, and returns its isotopes in `(Z, A)` order
    /// without duplicates.
    pub fn load(&self, name: &str) -> Result<Network, Error> {
        let mut chain = Vec::new();
        let mut isotopes = Vec::new();
        self.collect(name, &mut chain, &mut isotopes)?;
        Ok(Network::from_unsorted(isotopes)?)
    }

    fn collect(
        &self,
        name: &str,
        chain: &mut Vec<String>,
        isotopes: &mut Vec<String>,
    ) -> Result<(), Error> {
        let base = name.trim_end_matches(".net");
        if chain.iter().any(|seen| seen == base) {
            chain.push(base.to_string());
            return Err(Error::IncludeCycle(chain.join(" -> ")));
        }

        let path = self.locate(base)?;
        debug!(net = base, path = %path.display(), "reading network file");
        let entries = reader::read(BufReader::new(File::open(&path)?))?;

        chain.push(base.to_string());
        for entry in entries {
            match entry {
                NetEntry::Isotope(iso) => isotopes.push(iso),
                NetEntry::Include(include) => self.collect(&include, chain, isotopes)?,
            }
        }
        chain.pop();
        Ok(())
    }

    /// Regular networks live in `NAME.net`; partial networks meant only for
    /// inclusion may have no extension.
    fn locate(&self, base: &str) -> Result<PathBuf, Error> {
        let direct = Path::new(base);
        if direct.is_absolute() || base.contains(std::path::MAIN_SEPARATOR) {
            for candidate in [direct.with_extension("net"), direct.to_path_buf()] {
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        self.search_dirs
            .iter()
            .flat_map(|dir| [dir.join(format!("{base}.net")), dir.join(base)])
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| Error::NetNotFound {
                name: base.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).expect("write net file");
    }

    #[test]
    fn loads_sorted_unique_isotopes_through_includes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "basic.net", "add_isos(\n o16\n he4\n h1\n c12\n)\n");
        write(dir.path(), "extras", "add_iso(neut)\nadd_isos(c12, ne20)\n");
        write(
            dir.path(),
            "co_burn.net",
            "include 'basic.net'\ninclude 'extras'\nadd_isos(\n mg 24 25\n)\n",
        );

        let loader = NetLoader::new([dir.path()]);
        let net = loader.load("co_burn.net").expect("load");
        assert_eq!(
            net.isotopes(),
            ["neut", "h1", "he4", "c12", "o16", "ne20", "mg24", "mg25"]
        );
        assert_eq!(loader.load("co_burn").unwrap(), net);
    }

    #[test]
    fn missing_network_is_reported_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = NetLoader::new([dir.path()]).load("nope.net").unwrap_err();
        assert!(matches!(err, Error::NetNotFound { ref name } if name == "nope"));
    }

    #[test]
    fn include_cycles_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "a.net", "include 'b'\n");
        write(dir.path(), "b.net", "add_iso(h1)\ninclude 'a.net'\n");
        let err = NetLoader::new([dir.path()]).load("a").unwrap_err();
        match err {
            Error::IncludeCycle(chain) => assert_eq!(chain, "a -> b -> a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_isotope_names_surface_as_model_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "bad.net", "add_isos(h1, qq7)\n");
        let err = NetLoader::new([dir.path()]).load("bad").unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn mesa_dir_layout() {
        let loader = NetLoader::from_mesa_dir("/opt/mesa");
        assert_eq!(
            loader.search_dirs(),
            [PathBuf::from("/opt/mesa/data/net_data/nets")]
        );
    }
}
