//! # Sign-in, registration and account deletion
//!
//! Credentials are checked on the client against the catalog's user list,
//! comparing email and password in plain text. That is the only thing the
//! remote API supports; it is not a secure design and nothing else should
//! build on it.

use store::SessionStore;
use thiserror::Error;

use crate::client::{CatalogApi, Collection, MesaApi};
use crate::error::ClientError;
use crate::models::{NewMestre, User};
use crate::session::Session;
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("Email ou senha inválidos")]
    InvalidCredentials,

    #[error("Erro ao fazer login. Tente novamente.")]
    Request(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Erro ao criar conta. Tente novamente.")]
pub struct RegisterError(#[from] pub ClientError);

/// Find the record matching an email/password pair. Both are compared
/// exactly as typed.
pub fn find_account<'a>(users: &'a [User], email: &str, senha: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.email == email && u.senha.as_deref() == Some(senha))
}

/// Match credentials against the catalog users and sign in on success.
pub async fn sign_in<T, S>(
    catalog: &CatalogApi<T>,
    session: &mut Session<S>,
    email: &str,
    senha: &str,
) -> Result<User, LoginError>
where
    T: Transport,
    S: SessionStore,
{
    let users = catalog.users().await.inspect_err(|e| {
        tracing::error!("Failed to fetch users for login: {e}");
    })?;
    let user = find_account(&users, email, senha)
        .cloned()
        .ok_or(LoginError::InvalidCredentials)?;
    session.sign_in(&user.id);
    Ok(user)
}

/// Create an account. The caller navigates to the login page on success.
pub async fn register<T: Transport>(
    api: &MesaApi<T>,
    nome: &str,
    senha: &str,
) -> Result<(), RegisterError> {
    let account = NewMestre {
        nome: nome.trim().to_string(),
        senha: senha.to_string(),
    };
    api.register(&account).await.map_err(|e| {
        tracing::error!("Registration failed: {e}");
        RegisterError(e)
    })
}

/// Delete the signed-in account, then sign out.
pub async fn delete_account<T, S>(
    api: &MesaApi<T>,
    session: &mut Session<S>,
) -> Result<(), ClientError>
where
    T: Transport,
    S: SessionStore,
{
    let id = session
        .user_id()
        .map(str::to_string)
        .ok_or(ClientError::MissingPrecondition("user id"))?;
    api.delete(Collection::Mestre, &id).await.inspect_err(|e| {
        tracing::error!("Failed to delete account {id}: {e}");
    })?;
    session.sign_out();
    Ok(())
}
