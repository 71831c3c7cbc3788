use crate::models::{FileEntry, FileEntrySet};
use crate::system::filesystem::FileSystem;
use crate::utils::error::{PeekError, Result};
use log::debug;
use std::fmt;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

/// 후보 목록의 출처
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// 파이프/리다이렉트된 표준 입력
    Stdin,
    /// 디렉토리 스캔
    Directory(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 해석 결과
#[derive(Debug, Clone)]
pub struct Resolved {
    pub source: Source,
    pub entries: FileEntrySet,
}

/// 소스 해석기
///
/// 표준 입력이 터미널이 아니면 한 줄에 하나씩 경로를 읽고,
/// 터미널이면 현재 디렉토리를 스캔합니다.
#[derive(Debug, Default)]
pub struct SourceResolver {
    filesystem: FileSystem,
}

impl SourceResolver {
    pub fn new(filesystem: FileSystem) -> Self {
        Self { filesystem }
    }

    /// 프로세스 표준 입력과 현재 디렉토리 기준으로 해석
    pub fn resolve(&self) -> Result<Resolved> {
        let stdin = io::stdin();
        let piped = !stdin.is_terminal();
        self.resolve_with(piped, stdin.lock(), Path::new("."))
    }

    /// 입력 판단을 외부에서 주입하는 버전
    pub fn resolve_with<R: BufRead>(&self, piped: bool, input: R, dir: &Path) -> Result<Resolved> {
        let resolved = if piped {
            Resolved {
                source: Source::Stdin,
                entries: self.read_paths(input)?,
            }
        } else {
            Resolved {
                source: Source::Directory(dir.to_path_buf()),
                entries: self.filesystem.read_directory(dir)?.into(),
            }
        };

        debug!(
            "Resolved {} entries from {}",
            resolved.entries.len(),
            resolved.source
        );
        Ok(resolved)
    }

    /// 줄 단위 경로 목록 읽기
    ///
    /// 줄은 바이트 그대로 경로가 되므로 UTF-8이 아닌 파일 이름도 받습니다.
    /// 빈 줄은 무시하고, 디렉토리/심볼릭 링크/stat 실패 경로는 제외합니다.
    /// 입력 스트림 자체를 읽지 못하면 에러입니다.
    pub fn read_paths<R: BufRead>(&self, input: R) -> Result<FileEntrySet> {
        let mut entries = Vec::new();

        for line in input.split(b'\n') {
            let mut line = line.map_err(PeekError::ReadInput)?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }

            let Some(path) = Self::line_to_path(line) else {
                continue;
            };
            if !self.filesystem.classify(&path).is_excluded() {
                entries.push(FileEntry::new(path));
            }
        }

        Ok(entries.into())
    }

    #[cfg(unix)]
    fn line_to_path(bytes: Vec<u8>) -> Option<PathBuf> {
        use std::os::unix::ffi::OsStringExt;
        Some(PathBuf::from(std::ffi::OsString::from_vec(bytes)))
    }

    /// 유닉스 외 플랫폼에서는 UTF-8이 아닌 줄을 제외
    #[cfg(not(unix))]
    fn line_to_path(bytes: Vec<u8>) -> Option<PathBuf> {
        match String::from_utf8(bytes) {
            Ok(line) => Some(PathBuf::from(line)),
            Err(err) => {
                log::warn!("Skipping piped line that is not UTF-8: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;

    fn labels(set: &FileEntrySet) -> Vec<String> {
        set.iter().map(FileEntry::label).collect()
    }

    #[test]
    fn test_piped_paths_skip_directories() {
        let temp = TempDir::new().unwrap();
        let f1 = temp.path().join("f1");
        let f2 = temp.path().join("f2");
        File::create(&f1).unwrap();
        File::create(&f2).unwrap();
        let dir = temp.path().join("notafile");
        fs::create_dir(&dir).unwrap();

        let input = format!("{}\n{}\n{}/\n", f1.display(), f2.display(), dir.display());
        let set = SourceResolver::default()
            .read_paths(Cursor::new(input))
            .unwrap();

        assert_eq!(
            labels(&set),
            vec![f1.display().to_string(), f2.display().to_string()]
        );
    }

    #[test]
    fn test_piped_paths_skip_blank_and_missing() {
        let temp = TempDir::new().unwrap();
        let keep = temp.path().join("keep.txt");
        File::create(&keep).unwrap();
        let missing = temp.path().join("missing.txt");

        let input = format!("\n{}\n\n{}\n", missing.display(), keep.display());
        let set = SourceResolver::default()
            .read_paths(Cursor::new(input))
            .unwrap();

        assert_eq!(labels(&set), vec![keep.display().to_string()]);
    }

    /// N개 중 K개가 디렉토리/링크면 N-K개, 상대 순서 유지
    #[cfg(unix)]
    #[test]
    fn test_piped_paths_count_and_order() {
        let temp = TempDir::new().unwrap();
        let names = ["c.txt", "a.txt", "b.txt"];
        for name in names {
            File::create(temp.path().join(name)).unwrap();
        }
        fs::create_dir(temp.path().join("d1")).unwrap();
        unix_fs::symlink(temp.path().join("a.txt"), temp.path().join("l1")).unwrap();

        let order = ["c.txt", "d1", "a.txt", "l1", "b.txt"];
        let input: String = order
            .iter()
            .map(|name| format!("{}\n", temp.path().join(name).display()))
            .collect();

        let set = SourceResolver::default()
            .read_paths(Cursor::new(input))
            .unwrap();

        assert_eq!(set.len(), order.len() - 2);
        let expected: Vec<String> = names
            .iter()
            .map(|name| temp.path().join(name).display().to_string())
            .collect();
        assert_eq!(labels(&set), expected);
    }

    #[test]
    fn test_piped_crlf_lines() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("win.txt");
        File::create(&file).unwrap();

        let input = format!("{}\r\n", file.display());
        let set = SourceResolver::default()
            .read_paths(Cursor::new(input))
            .unwrap();

        assert_eq!(set.len(), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_piped_non_utf8_file_name_is_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.txt");
        File::create(&good).unwrap();
        let latin1 = temp.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
        File::create(&latin1).unwrap();

        let mut input = Vec::new();
        input.extend_from_slice(good.as_os_str().as_bytes());
        input.push(b'\n');
        input.extend_from_slice(latin1.as_os_str().as_bytes());
        input.push(b'\n');

        let set = SourceResolver::default()
            .read_paths(Cursor::new(input))
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.at(0).unwrap().path, good);
        assert_eq!(set.at(1).unwrap().path, latin1);
    }

    /// 읽기 도중 실패하는 입력 스트림
    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn test_input_stream_error_is_fatal() {
        let err = SourceResolver::default()
            .read_paths(io::BufReader::new(FailingReader))
            .unwrap_err();

        assert!(matches!(err, PeekError::ReadInput(_)));
    }

    #[test]
    fn test_resolve_terminal_scans_directory() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("a.txt")).unwrap();
        File::create(temp.path().join("b.txt")).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let resolved = SourceResolver::default()
            .resolve_with(false, Cursor::new("ignored\n"), temp.path())
            .unwrap();

        assert_eq!(resolved.source, Source::Directory(temp.path().to_path_buf()));
        assert_eq!(resolved.entries.len(), 2);
        assert_eq!(
            resolved.entries.at(0).unwrap().path,
            temp.path().join("a.txt")
        );
    }

    #[test]
    fn test_resolve_piped_ignores_directory() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("in_dir.txt")).unwrap();

        let resolved = SourceResolver::default()
            .resolve_with(true, Cursor::new(""), temp.path())
            .unwrap();

        assert_eq!(resolved.source, Source::Stdin);
        assert!(resolved.entries.is_empty());
    }

    #[test]
    fn test_resolve_unreadable_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = SourceResolver::default()
            .resolve_with(false, Cursor::new(""), &missing)
            .unwrap_err();

        assert!(matches!(err, PeekError::ReadDirectory { .. }));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Stdin.to_string(), "stdin");
        assert_eq!(Source::Directory(PathBuf::from(".")).to_string(), ".");
    }
}
