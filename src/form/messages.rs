//! User-facing text. The product ships in Portuguese; every string the
//! controller can show lives here so the config layer can override the
//! per-form ones.

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const PHONE_REQUIRED: &str = "Telefone é obrigatório";
pub const HANDLE_REQUIRED: &str = "Instagram é obrigatório";
pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 8 caracteres";
pub const CONFIRM_REQUIRED: &str = "Confirme sua senha";
pub const PASSWORDS_DIFFER: &str = "As senhas não coincidem";

pub const LOGIN_REJECTED: &str = "Credenciais inválidas";
pub const LOGIN_TRANSPORT_FAILED: &str = "Erro ao fazer login. Tente novamente.";
pub const REGISTER_REJECTED: &str = "Erro ao registrar usuário";
pub const REGISTER_TRANSPORT_FAILED: &str = "Erro ao registrar usuário. Tente novamente.";

pub const LOGIN_CAPTION: &str = "Entrar";
pub const REGISTER_CAPTION: &str = "Continuar";
pub const BUSY_CAPTION: &str = "Processando...";

pub const ANALYSIS_FAILED: &str = "Erro ao processar a análise";
