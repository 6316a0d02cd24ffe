//! gRPC service implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use stow_core::{AdaptorRegistry, Credential, FileSystem};

use crate::describe::map_adaptor_description;
use crate::error::map_error;
use crate::stow::create_file_system_request::Credential as WireCredential;
use crate::stow::file_systems_server::FileSystems;
use crate::stow::{
    AdaptorName, AdaptorNames, CreateFileSystemRequest, Empty, FileSystem as ProtoFileSystem,
    FileSystemAdaptorDescription, FileSystemAdaptorDescriptions, FileSystemId,
    FileSystems as ProtoFileSystems, Path,
};

pub struct FileSystemsService {
    registry: Arc<AdaptorRegistry>,
    /// open filesystem instances by id
    filesystems: RwLock<HashMap<String, Box<dyn FileSystem>>>,
    next_id: AtomicU64,
}

impl FileSystemsService {
    pub fn new(registry: Arc<AdaptorRegistry>) -> Self {
        Self {
            registry,
            filesystems: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    fn filesystem_id(&self, adaptor: &str, username: &str, location: &str) -> String {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{}://{}@{}#{}", adaptor, username, location, seq)
    }
}

/// decode the request credential; an absent one means the default credential
fn map_credential(credential: Option<WireCredential>) -> Credential {
    match credential {
        Some(WireCredential::DefaultCredential(c)) => Credential::Default {
            username: if c.username.is_empty() {
                None
            } else {
                Some(c.username)
            },
        },
        Some(WireCredential::PasswordCredential(c)) => Credential::Password {
            username: c.username,
            password: c.password,
        },
        Some(WireCredential::CertificateCredential(c)) => Credential::Certificate {
            username: c.username,
            certfile: c.certfile,
            passphrase: c.passphrase,
        },
        None => Credential::default(),
    }
}

#[tonic::async_trait]
impl FileSystems for FileSystemsService {
    async fn get_adaptor_description(
        &self,
        request: Request<AdaptorName>,
    ) -> std::result::Result<Response<FileSystemAdaptorDescription>, Status> {
        let name = request.into_inner().name;
        debug!("adaptor description request: {}", name);

        let adaptor = self.registry.get(&name).map_err(map_error)?;
        Ok(Response::new(map_adaptor_description(adaptor.description())))
    }

    async fn get_adaptor_descriptions(
        &self,
        _request: Request<Empty>,
    ) -> std::result::Result<Response<FileSystemAdaptorDescriptions>, Status> {
        let descriptions = self
            .registry
            .descriptions()
            .into_iter()
            .map(map_adaptor_description)
            .collect();
        Ok(Response::new(FileSystemAdaptorDescriptions { descriptions }))
    }

    async fn get_adaptor_names(
        &self,
        _request: Request<Empty>,
    ) -> std::result::Result<Response<AdaptorNames>, Status> {
        let names = self
            .registry
            .names()
            .into_iter()
            .map(|n| n.to_string())
            .collect();
        Ok(Response::new(AdaptorNames { names }))
    }

    async fn create_file_system(
        &self,
        request: Request<CreateFileSystemRequest>,
    ) -> std::result::Result<Response<ProtoFileSystem>, Status> {
        let req = request.into_inner();
        let credential = map_credential(req.credential);

        let adaptor = self.registry.get(&req.adaptor).map_err(map_error)?;
        let filesystem = adaptor
            .create_filesystem(&req.location, &credential, &req.properties)
            .map_err(map_error)?;

        let id = self.filesystem_id(&req.adaptor, credential.username(), &req.location);
        info!("created filesystem {}", id);
        self.filesystems.write().await.insert(id.clone(), filesystem);

        Ok(Response::new(ProtoFileSystem {
            id,
            adaptor: req.adaptor,
            location: req.location,
        }))
    }

    async fn list_file_systems(
        &self,
        _request: Request<Empty>,
    ) -> std::result::Result<Response<ProtoFileSystems>, Status> {
        let table = self.filesystems.read().await;
        let filesystems = table
            .iter()
            .map(|(id, fs)| ProtoFileSystem {
                id: id.clone(),
                adaptor: fs.adaptor_name().to_string(),
                location: fs.location().to_string(),
            })
            .collect();
        Ok(Response::new(ProtoFileSystems { filesystems }))
    }

    async fn get_entry_path(
        &self,
        request: Request<FileSystemId>,
    ) -> std::result::Result<Response<Path>, Status> {
        let id = request.into_inner().id;
        let table = self.filesystems.read().await;
        let filesystem = table
            .get(&id)
            .ok_or_else(|| Status::not_found(format!("filesystem not found: {}", id)))?;
        Ok(Response::new(Path {
            path: filesystem.entry_path(),
        }))
    }

    async fn close_file_system(
        &self,
        request: Request<FileSystemId>,
    ) -> std::result::Result<Response<Empty>, Status> {
        let id = request.into_inner().id;
        let mut table = self.filesystems.write().await;
        match table.remove(&id) {
            Some(mut filesystem) => {
                filesystem.close().map_err(map_error)?;
                info!("closed filesystem {}", id);
                Ok(Response::new(Empty {}))
            }
            None => Err(Status::not_found(format!("filesystem not found: {}", id))),
        }
    }
}
