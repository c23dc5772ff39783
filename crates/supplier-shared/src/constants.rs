//! Application-wide constants

/// Resource path the supplier routes are mounted under.
pub const SUPPLIER_RESOURCE_PATH: &str = "/fornecedor";

pub const MSG_SUPPLIER_NOT_FOUND: &str = "Não foi encontrado usuario com esse ID";
pub const MSG_CREATE_FAILED: &str = "Houve um problema ao salvar o registro";
pub const MSG_UPDATE_FAILED: &str = "Houve um problema ao atualizar o registro";
pub const MSG_DELETE_FAILED: &str = "Houve um problema ao deletar o registro";
pub const MSG_SUPPLIER_DELETED: &str = "Usuário deletado";
pub const MSG_INTERNAL_ERROR: &str = "Ocorreu um erro inesperado ao processar a requisição";

/// Database URL that selects the in-process store instead of PostgreSQL.
pub const IN_MEMORY_DATABASE_URL: &str = "memory://";
