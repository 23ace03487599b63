//! z/OSMF backend integration tests.
//!
//! Each test starts a mock z/OSMF server on an OS-assigned port, looks the
//! implementation up through the register, and checks both the decoded
//! result and the HTTP request the backend sent.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use zowe_explorer_api::types::{DatasetCreateParams, UssNodeKind};
use zowe_explorer_api::{ApiError, ApiRegister, Profile};

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<Recorded>>,
}

impl MockState {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> Recorded {
        self.requests().last().cloned().expect("a request was made")
    }
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

fn text_response(body: &str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        body.to_string(),
    )
        .into_response()
}

fn job_json(jobid: &str, jobname: &str) -> Value {
    json!({
        "jobid": jobid,
        "jobname": jobname,
        "owner": "IBMUSER",
        "status": "OUTPUT",
        "type": "JOB",
        "class": "A",
        "retcode": "CC 0000",
        "subsystem": "JES2",
        "job-correlator": format!("J{jobid}"),
    })
}

fn spool_json(id: u32, ddname: &str, stepname: Option<&str>) -> Value {
    json!({
        "jobid": "JOB00001",
        "jobname": "TESTJOB",
        "id": id,
        "ddname": ddname,
        "stepname": stepname,
        "class": "X",
        "recfm": "FB",
        "lrecl": 133,
        "byte-count": 100,
        "record-count": 2,
        "job-correlator": "JJOB00001",
        "subsystem": "JES2",
    })
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let query = uri.query().map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        headers,
        body: body.to_vec(),
    });

    let query = query.unwrap_or_default();
    match (method.as_str(), path.as_str()) {
        ("GET", "/zosmf/restfiles/fs") => json_response(
            StatusCode::OK,
            json!({
                "items": [
                    {"name": ".", "mode": "drwxr-xr-x", "size": 8192, "uid": 0, "user": "IBMUSER", "gid": 1, "group": "SYS1", "mtime": "2024-01-01T00:00:00"},
                    {"name": "a.txt", "mode": "-rw-r--r--", "size": 5, "uid": 0, "user": "IBMUSER", "gid": 1, "group": "SYS1", "mtime": "2024-01-01T00:00:00"}
                ],
                "returnedRows": 2,
                "totalRows": 2,
                "JSONversion": 1
            }),
        ),
        ("PUT", "/zosmf/restfiles/fs/u/ibmuser/a.bin") => json_response(
            StatusCode::OK,
            json!({"stdout": ["b binary      T=off /u/ibmuser/a.bin"]}),
        ),
        ("PUT", "/zosmf/restfiles/fs/u/ibmuser/a.txt") if body.starts_with(b"{") => {
            json_response(
                StatusCode::OK,
                json!({"stdout": ["t ISO8859-1   T=on  /u/ibmuser/a.txt"]}),
            )
        }
        ("GET", "/zosmf/restfiles/fs/u/ibmuser/a.txt") => text_response("hello"),
        ("GET", "/zosmf/restfiles/ds") => json_response(
            StatusCode::OK,
            json!({
                "items": [
                    {"dsname": "IBMUSER.CNTL", "dsorg": "PO", "recfm": "FB", "lrecl": "80", "vol": "VOL001"},
                    {"dsname": "IBMUSER.OLD", "vol": "MIGRAT", "migr": "YES"}
                ],
                "returnedRows": 2,
                "totalRows": 2,
                "JSONversion": 1
            }),
        ),
        ("GET", "/zosmf/restfiles/ds/IBMUSER.CNTL/member") => json_response(
            StatusCode::OK,
            json!({
                "items": [{"member": "IEFBR14"}, {"member": "SORT", "vers": 1, "mod": 3, "user": "IBMUSER"}],
                "returnedRows": 2,
                "totalRows": 2,
                "JSONversion": 1
            }),
        ),
        ("GET", "/zosmf/restfiles/ds/IBMUSER.CNTL(IEFBR14)") => {
            text_response("//IEFBR14 JOB\n//STEP1 EXEC PGM=IEFBR14\n")
        }
        ("GET", "/zosmf/restfiles/ds/IBMUSER.MISSING") => json_response(
            StatusCode::NOT_FOUND,
            json!({"rc": 4, "reason": 8, "category": 1, "message": "Data set not found", "details": ["ISRZ002 Data set not cataloged"]}),
        ),
        ("GET", "/zosmf/restfiles/ds/IBMUSER.PLAIN") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response()
        }
        ("GET", "/zosmf/restjobs/jobs") => {
            if query.contains("jobid=JOB00001") {
                json_response(StatusCode::OK, json!([job_json("JOB00001", "TESTJOB")]))
            } else if query.contains("jobid=") {
                json_response(StatusCode::OK, json!([]))
            } else {
                json_response(
                    StatusCode::OK,
                    json!([job_json("JOB00001", "TESTJOB"), job_json("JOB00002", "TESTJOB2")]),
                )
            }
        }
        ("GET", "/zosmf/restjobs/jobs/TESTJOB/JOB00001/files") => json_response(
            StatusCode::OK,
            json!([spool_json(2, "JESMSGLG", None), spool_json(102, "SYSPRINT", Some("STEP1"))]),
        ),
        ("GET", "/zosmf/restjobs/jobs/EVILJOB/JOB00066/files") => json_response(
            StatusCode::OK,
            json!([
                {"jobid": "JOB00066", "jobname": "EVILJOB", "id": 2, "ddname": "JESMSGLG"},
                {"jobid": "JOB00066", "jobname": "EVILJOB", "id": 3, "ddname": "../../pwned"}
            ]),
        ),
        ("GET", "/zosmf/restjobs/jobs/TESTJOB/JOB00001/files/2/records") => {
            text_response("JES2 JOB LOG\n")
        }
        ("GET", "/zosmf/restjobs/jobs/TESTJOB/JOB00001/files/102/records") => {
            text_response("SORT COMPLETED\n")
        }
        ("GET", "/zosmf/restjobs/jobs/TESTJOB/JOB00001/files/JCL/records") => {
            text_response("//TESTJOB JOB (ACCT)\n")
        }
        ("PUT", "/zosmf/restjobs/jobs") => {
            json_response(StatusCode::CREATED, job_json("JOB00003", "SUBMIT"))
        }
        ("DELETE", "/zosmf/restjobs/jobs/TESTJOB/JOB00001") => json_response(
            StatusCode::OK,
            json!({"jobid": "JOB00001", "jobname": "TESTJOB", "status": 0, "message": "Request was successful.", "original-jobid": "JOB00001"}),
        ),
        ("GET", _) => json_response(
            StatusCode::NOT_FOUND,
            json!({"rc": 4, "reason": 0, "category": 4, "message": "not found"}),
        ),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn start_mock() -> (SocketAddr, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let app = Router::new().fallback(handle).with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn profile_for(addr: SocketAddr, user: &str, password: &str) -> Profile {
    Profile::new(format!("mock-{user}"), "zosmf")
        .with("host", "127.0.0.1")
        .with("port", addr.port())
        .with("protocol", "http")
        .with("user", user)
        .with("password", password)
}

fn profile(addr: SocketAddr) -> Profile {
    profile_for(addr, "IBMUSER", "SYS1")
}

// ─── USS ───

#[tokio::test]
async fn test_uss_file_list() {
    let (addr, state) = start_mock().await;
    let uss = ApiRegister::new().get_uss_api(&profile(addr)).unwrap();

    let listing = uss.file_list("/u/ibmuser").await.unwrap();
    assert_eq!(listing.items.len(), 2);
    assert!(listing.items[0].is_directory());
    assert_eq!(listing.items[1].name, "a.txt");
    assert_eq!(listing.items[1].size, 5);

    let req = state.last();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/zosmf/restfiles/fs");
    assert_eq!(req.query.as_deref(), Some("path=%2Fu%2Fibmuser"));
    assert_eq!(req.header("authorization"), Some("Basic SUJNVVNFUjpTWVMx"));
    assert_eq!(req.header("x-csrf-zosmf-header"), Some("true"));
}

#[tokio::test]
async fn test_uss_tag_detection() {
    let (addr, state) = start_mock().await;
    let uss = ApiRegister::new().get_uss_api(&profile(addr)).unwrap();

    assert!(uss.is_file_tag_bin_or_ascii("/u/ibmuser/a.bin").await.unwrap());
    assert_eq!(
        state.last().json(),
        json!({"request": "chtag", "action": "list"})
    );
    assert!(!uss.is_file_tag_bin_or_ascii("/u/ibmuser/a.txt").await.unwrap());
}

#[tokio::test]
async fn test_uss_read_and_write() {
    let (addr, state) = start_mock().await;
    let uss = ApiRegister::new().get_uss_api(&profile(addr)).unwrap();

    let content = uss.get_contents("/u/ibmuser/a.txt", false).await.unwrap();
    assert_eq!(content, b"hello".to_vec());
    assert_eq!(state.last().header("x-ibm-data-type"), Some("text"));

    uss.put_contents("/u/ibmuser/b.bin", vec![0x00, 0xC1, 0xFF], true)
        .await
        .unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/zosmf/restfiles/fs/u/ibmuser/b.bin");
    assert_eq!(req.header("x-ibm-data-type"), Some("binary"));
    assert_eq!(req.header("content-type"), Some("application/octet-stream"));
    assert_eq!(req.body, vec![0x00, 0xC1, 0xFF]);
}

#[tokio::test]
async fn test_uss_create_delete_rename() {
    let (addr, state) = start_mock().await;
    let uss = ApiRegister::new().get_uss_api(&profile(addr)).unwrap();

    uss.create("/u/ibmuser/newdir", UssNodeKind::Directory, Some("rwxr-xr-x"))
        .await
        .unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.json(), json!({"type": "directory", "mode": "rwxr-xr-x"}));

    uss.delete("/u/ibmuser/newdir", true).await.unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.header("x-ibm-option"), Some("recursive"));

    uss.delete("/u/ibmuser/file", false).await.unwrap();
    assert_eq!(state.last().header("x-ibm-option"), None);

    uss.rename("/u/ibmuser/old", "/u/ibmuser/new").await.unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/zosmf/restfiles/fs/u/ibmuser/new");
    assert_eq!(req.json(), json!({"request": "move", "from": "/u/ibmuser/old"}));
}

// ─── MVS ───

#[tokio::test]
async fn test_mvs_data_set_list() {
    let (addr, state) = start_mock().await;
    let mvs = ApiRegister::new().get_mvs_api(&profile(addr)).unwrap();

    let list = mvs.data_set("IBMUSER.*").await.unwrap();
    assert_eq!(list.items.len(), 2);
    assert!(list.items[0].is_partitioned());
    assert!(list.items[1].is_migrated());

    let req = state.last();
    assert_eq!(req.query.as_deref(), Some("dslevel=IBMUSER.*"));
    assert_eq!(req.header("x-ibm-attributes"), Some("base"));
}

#[tokio::test]
async fn test_mvs_members_and_contents() {
    let (addr, _state) = start_mock().await;
    let mvs = ApiRegister::new().get_mvs_api(&profile(addr)).unwrap();

    let members = mvs.all_members("IBMUSER.CNTL").await.unwrap();
    let names: Vec<_> = members.items.iter().map(|m| m.member.as_str()).collect();
    assert_eq!(names, vec!["IEFBR14", "SORT"]);
    assert_eq!(members.items[1].modification, Some(3));

    let content = mvs.get_contents("IBMUSER.CNTL(IEFBR14)", false).await.unwrap();
    assert!(String::from_utf8(content).unwrap().contains("PGM=IEFBR14"));
}

#[tokio::test]
async fn test_mvs_error_body_is_surfaced() {
    let (addr, _state) = start_mock().await;
    let mvs = ApiRegister::new().get_mvs_api(&profile(addr)).unwrap();

    let err = mvs.get_contents("IBMUSER.MISSING", false).await.unwrap_err();
    match err {
        ApiError::Zosmf {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Data set not found\nISRZ002 Data set not cataloged");
            assert_eq!(body.map(|b| b.reason), Some(8));
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = mvs.get_contents("IBMUSER.PLAIN", false).await.unwrap_err();
    match err {
        ApiError::Zosmf {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend exploded");
            assert!(body.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_mvs_allocation_requests() {
    let (addr, state) = start_mock().await;
    let mvs = ApiRegister::new().get_mvs_api(&profile(addr)).unwrap();

    mvs.create_data_set("IBMUSER.NEW.PDS", &DatasetCreateParams::partitioned())
        .await
        .unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.NEW.PDS");
    assert_eq!(req.json()["dsorg"], "PO");
    assert_eq!(req.json()["dirblk"], 25);

    mvs.allocate_like_data_set("IBMUSER.COPY", "IBMUSER.CNTL")
        .await
        .unwrap();
    assert_eq!(state.last().json(), json!({"like": "IBMUSER.CNTL"}));

    mvs.create_data_set_member("IBMUSER.CNTL(NEWMEM)").await.unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.CNTL(NEWMEM)");
    assert!(req.body.is_empty());

    let err = mvs.create_data_set_member("IBMUSER.CNTL").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_mvs_copy_rename_migrate_delete() {
    let (addr, state) = start_mock().await;
    let mvs = ApiRegister::new().get_mvs_api(&profile(addr)).unwrap();

    mvs.copy_data_set_member("IBMUSER.CNTL(A)", "IBMUSER.BACKUP(B)", true)
        .await
        .unwrap();
    let req = state.last();
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.BACKUP(B)");
    assert_eq!(
        req.json(),
        json!({"request": "copy", "from-dataset": {"dsn": "IBMUSER.CNTL", "member": "A"}, "replace": true})
    );

    mvs.rename_data_set("IBMUSER.OLD", "IBMUSER.NEW").await.unwrap();
    let req = state.last();
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.NEW");
    assert_eq!(
        req.json(),
        json!({"request": "rename", "from-dataset": {"dsn": "IBMUSER.OLD"}})
    );

    mvs.rename_data_set_member("IBMUSER.CNTL", "OLDMEM", "NEWMEM")
        .await
        .unwrap();
    let req = state.last();
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.CNTL(NEWMEM)");
    assert_eq!(req.json()["from-dataset"]["member"], "OLDMEM");

    mvs.h_migrate_data_set("IBMUSER.OLD").await.unwrap();
    assert_eq!(state.last().json(), json!({"request": "hmigrate"}));

    mvs.delete_data_set("IBMUSER.OLD").await.unwrap();
    let req = state.last();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.path, "/zosmf/restfiles/ds/IBMUSER.OLD");
}

// ─── JES ───

#[tokio::test]
async fn test_jes_list_and_get_job() {
    let (addr, state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();

    let jobs = jes.get_jobs_by_owner_and_prefix("IBMUSER", "TEST*").await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].jobname, "TESTJOB2");
    assert_eq!(
        state.last().query.as_deref(),
        Some("owner=IBMUSER&prefix=TEST*")
    );

    let job = jes.get_job("job00001").await.unwrap();
    assert_eq!(job.jobid, "JOB00001");
    assert_eq!(job.retcode.as_deref(), Some("CC 0000"));
    assert_eq!(state.last().query.as_deref(), Some("owner=*&jobid=JOB00001"));

    let err = jes.get_job("JOB09999").await.unwrap_err();
    assert!(matches!(err, ApiError::JobNotFound { jobid } if jobid == "JOB09999"));
}

#[tokio::test]
async fn test_jes_spool_and_jcl() {
    let (addr, _state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();

    let files = jes.get_spool_files("TESTJOB", "JOB00001").await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].stepname.as_deref(), Some("STEP1"));

    let content = jes
        .get_spool_content_by_id("TESTJOB", "JOB00001", 102)
        .await
        .unwrap();
    assert_eq!(content, "SORT COMPLETED\n");

    let job = jes.get_job("JOB00001").await.unwrap();
    let jcl = jes.get_jcl_for_job(&job).await.unwrap();
    assert!(jcl.starts_with("//TESTJOB JOB"));
}

#[tokio::test]
async fn test_jes_download_spool_content() {
    let (addr, _state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let written = jes
        .download_spool_content("TESTJOB", "JOB00001", dir.path())
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let joblog = dir.path().join("JOB00001").join("JESMSGLG.txt");
    let sysprint = dir.path().join("JOB00001").join("STEP1").join("SYSPRINT.txt");
    assert_eq!(written, vec![joblog.clone(), sysprint.clone()]);
    assert_eq!(std::fs::read_to_string(joblog).unwrap(), "JES2 JOB LOG\n");
    assert_eq!(std::fs::read_to_string(sysprint).unwrap(), "SORT COMPLETED\n");
}

#[tokio::test]
async fn test_jes_submit_and_delete() {
    let (addr, state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();

    let jcl = "//SUBMIT JOB (ACCT)\n//STEP1 EXEC PGM=IEFBR14\n";
    let job = jes.submit_jcl(jcl).await.unwrap();
    assert_eq!(job.jobid, "JOB00003");
    let req = state.last();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.path, "/zosmf/restjobs/jobs");
    assert_eq!(req.header("content-type"), Some("text/plain"));
    assert_eq!(req.header("x-ibm-intrdr-lrecl"), Some("80"));
    assert_eq!(req.body, jcl.as_bytes());

    jes.submit_job("IBMUSER.CNTL(IEFBR14)").await.unwrap();
    assert_eq!(
        state.last().json(),
        json!({"file": "//'IBMUSER.CNTL(IEFBR14)'"})
    );

    let feedback = jes.delete_job("TESTJOB", "JOB00001").await.unwrap();
    assert_eq!(feedback.status, 0);
    assert_eq!(feedback.original_jobid.as_deref(), Some("JOB00001"));
    assert_eq!(state.last().method, Method::DELETE);
}

#[tokio::test]
async fn test_jes_download_rejects_escaping_spool_names() {
    let (addr, state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("out");

    let err = jes
        .download_spool_content("EVILJOB", "JOB00066", &dir)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));

    // Nothing is fetched or written once any spool name is rejected.
    assert!(!dir.exists());
    assert!(!root.path().join("pwned.txt").exists());
    assert!(state.requests().iter().all(|r| !r.path.ends_with("/records")));
}

#[tokio::test]
async fn test_jes_rejects_job_names_with_separators() {
    let (addr, state) = start_mock().await;
    let jes = ApiRegister::new().get_jes_api(&profile(addr)).unwrap();

    let err = jes.get_spool_files("A/B", "JOB00001").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    let err = jes.delete_job("TESTJOB", "..").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert!(state.requests().is_empty());
}

// ─── Path validation ───

#[tokio::test]
async fn test_dot_segments_are_not_resolved() {
    let (addr, state) = start_mock().await;
    let register = ApiRegister::new();
    let uss = register.get_uss_api(&profile(addr)).unwrap();
    let mvs = register.get_mvs_api(&profile(addr)).unwrap();

    let err = uss.delete("/u/ibmuser/../tmp/f.txt", false).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    let err = uss
        .put_contents("/u/ibmuser/./f.txt", b"x".to_vec(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    let err = uss.rename("/u/ibmuser/a", "/u/../b").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    let err = mvs.delete_data_set("IBMUSER/OLD").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert!(state.requests().is_empty());
}

// ─── Profile binding ───

#[tokio::test]
async fn test_each_handle_uses_its_own_profile() {
    let (addr, state) = start_mock().await;
    let register = ApiRegister::new();

    let ibmuser = register.get_uss_api(&profile(addr)).unwrap();
    let other = register
        .get_uss_api(&profile_for(addr, "OTHER", "PASS"))
        .unwrap();

    ibmuser.file_list("/u").await.unwrap();
    other.file_list("/u").await.unwrap();

    let auth: Vec<_> = state
        .requests()
        .iter()
        .map(|r| r.header("authorization").unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        auth,
        vec!["Basic SUJNVVNFUjpTWVMx", "Basic T1RIRVI6UEFTUw=="]
    );
}

#[tokio::test]
async fn test_profile_without_host_fails() {
    let register = ApiRegister::new();
    let uss = register.get_uss_api(&Profile::new("bare", "zosmf")).unwrap();
    let err = uss.file_list("/").await.unwrap_err();
    assert!(matches!(err, ApiError::MissingProfileField { field: "host", .. }));
}
