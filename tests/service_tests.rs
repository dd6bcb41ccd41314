//! Testes dos serviços direto sobre o pool, sem passar pelo HTTP.

use chrono::{Duration, Local, NaiveDate};
use crm_gas_backend::{
    common::error::AppError,
    models::cliente::{CreateClientePayload, UpdateClientePayload},
    AppState,
};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicU32, Ordering};

/// Contador para gerar um banco em memória único por teste
static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

async fn setup_state() -> AppState {
    let db_num = TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let db_url = format!("sqlite:file:svctest{}?mode=memory&cache=shared", db_num);

    let pool = SqlitePool::connect(&db_url).await.unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    AppState::from_pool(pool)
}

fn novo_cliente(nome: &str, telefone: &str) -> CreateClientePayload {
    CreateClientePayload {
        nome: nome.to_string(),
        telefone: telefone.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_uses_domain_defaults() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Maria", "88999990000"))
        .await
        .unwrap();

    let lista = state.cliente_service.list_active().await.unwrap();
    let cliente = lista.iter().find(|c| c.id == id).unwrap();

    assert_eq!(cliente.ciclo_dias, 30);
    assert_eq!(cliente.endereco, "");
    assert_eq!(cliente.observacoes, "");
    assert_eq!(cliente.ultima_compra, None);
    assert!(cliente.ativo);
}

#[tokio::test]
async fn update_keeps_absent_fields_and_ignores_empty_date() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(CreateClientePayload {
            ultima_compra: Some("2024-01-10".to_string()),
            ciclo_dias: Some(15),
            ..novo_cliente("João", "88911112222")
        })
        .await
        .unwrap();

    // Só o nome muda; a data vazia conta como ausente
    state
        .cliente_service
        .update(
            id,
            UpdateClientePayload {
                nome: Some("João Pedro".to_string()),
                ultima_compra: Some("".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let lista = state.cliente_service.list_active().await.unwrap();
    let cliente = lista.iter().find(|c| c.id == id).unwrap();

    assert_eq!(cliente.nome, "João Pedro");
    assert_eq!(cliente.telefone, "88911112222");
    assert_eq!(cliente.ciclo_dias, 15);
    assert_eq!(
        cliente.ultima_compra,
        Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
    );
}

#[tokio::test]
async fn update_rejects_bad_date() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Ana", "111"))
        .await
        .unwrap();

    let result = state
        .cliente_service
        .update(
            id,
            UpdateClientePayload {
                ultima_compra: Some("10/01/2024".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidDate)));
}

#[tokio::test]
async fn deactivate_hides_but_keeps_the_row() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Ana", "111"))
        .await
        .unwrap();

    state.cliente_service.deactivate(id).await.unwrap();

    assert!(state.cliente_service.list_active().await.unwrap().is_empty());

    let ativo: bool = sqlx::query_scalar("SELECT ativo FROM clientes WHERE id = ?")
        .bind(id)
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert!(!ativo);

    // Desativar de novo (ou um id inexistente) é 404
    let result = state.cliente_service.deactivate(9999).await;
    assert!(matches!(result, Err(AppError::CustomerNotFound)));
}

#[tokio::test]
async fn alert_window_boundary_is_inclusive() {
    let state = setup_state().await;
    let hoje = Local::now().date_naive();
    let formato = "%Y-%m-%d";

    // Próxima compra exatamente em hoje + 5: ainda conta
    state
        .cliente_service
        .create(CreateClientePayload {
            ciclo_dias: Some(30),
            ultima_compra: Some((hoje - Duration::days(25)).format(formato).to_string()),
            ..novo_cliente("No limite", "111")
        })
        .await
        .unwrap();

    // Próxima compra em hoje + 6: fora da janela
    state
        .cliente_service
        .create(CreateClientePayload {
            ciclo_dias: Some(30),
            ultima_compra: Some((hoje - Duration::days(24)).format(formato).to_string()),
            ..novo_cliente("Fora da janela", "222")
        })
        .await
        .unwrap();

    // Sem última compra registrada: nunca entra no alerta
    state
        .cliente_service
        .create(novo_cliente("Sem compra", "333"))
        .await
        .unwrap();

    // Desativado não conta, mesmo vencido
    let desativado = state
        .cliente_service
        .create(CreateClientePayload {
            ciclo_dias: Some(30),
            ultima_compra: Some((hoje - Duration::days(90)).format(formato).to_string()),
            ..novo_cliente("Desativado", "444")
        })
        .await
        .unwrap();
    state.cliente_service.deactivate(desativado).await.unwrap();

    let painel = state.estatisticas_service.overview().await.unwrap();
    assert_eq!(painel.total_clientes, 3);
    assert_eq!(painel.clientes_alerta, 1);
    assert_eq!(painel.vendas_mes, 0);
}

#[tokio::test]
async fn send_bulk_continues_past_missing_ids() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Maria", "111"))
        .await
        .unwrap();

    let resumo = state
        .mensagem_service
        .send_bulk(&[id, 4242], "Oi [NOME]")
        .await
        .unwrap();

    assert_eq!(resumo.enviadas, 1);
    assert_eq!(resumo.erros, vec!["Cliente 4242 não encontrado".to_string()]);

    let historico = state.mensagem_service.history().await.unwrap();
    assert_eq!(historico.len(), 1);
    assert_eq!(historico[0].texto, "Oi Maria");
    assert_eq!(historico[0].status, "enviada");
}

#[tokio::test]
async fn send_bulk_reaches_deactivated_customers() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Ana", "111"))
        .await
        .unwrap();
    state.cliente_service.deactivate(id).await.unwrap();

    let resumo = state
        .mensagem_service
        .send_bulk(&[id], "Sentimos sua falta, [NOME]")
        .await
        .unwrap();

    assert_eq!(resumo.enviadas, 1);
    assert!(resumo.erros.is_empty());
}

#[tokio::test]
async fn send_bulk_rejects_empty_inputs() {
    let state = setup_state().await;

    let result = state.mensagem_service.send_bulk(&[], "Oi").await;
    assert!(matches!(result, Err(AppError::EmptyRecipients)));

    let result = state.mensagem_service.send_bulk(&[1], "").await;
    assert!(matches!(result, Err(AppError::EmptyMessage)));
}

#[tokio::test]
async fn history_caps_at_one_hundred() {
    let state = setup_state().await;

    let id = state
        .cliente_service
        .create(novo_cliente("Maria", "111"))
        .await
        .unwrap();

    let ids = vec![id; 105];
    let resumo = state.mensagem_service.send_bulk(&ids, "Oi").await.unwrap();
    assert_eq!(resumo.enviadas, 105);

    let historico = state.mensagem_service.history().await.unwrap();
    assert_eq!(historico.len(), 100);
}

#[tokio::test]
async fn admin_bootstrap_is_single_shot() {
    let state = setup_state().await;

    assert!(!state.auth_service.is_configured().await.unwrap());

    state
        .auth_service
        .create_admin("Admin", "admin@teste.com", "segredo123")
        .await
        .unwrap();

    assert!(state.auth_service.is_configured().await.unwrap());

    let result = state
        .auth_service
        .create_admin("Outro", "outro@teste.com", "x")
        .await;
    assert!(matches!(result, Err(AppError::AlreadyConfigured)));
}

#[tokio::test]
async fn login_rejects_inactive_account() {
    let state = setup_state().await;

    state
        .auth_service
        .create_admin("Admin", "admin@teste.com", "segredo123")
        .await
        .unwrap();

    sqlx::query("UPDATE usuarios SET ativo = 0 WHERE email = ?")
        .bind("admin@teste.com")
        .execute(&state.db_pool)
        .await
        .unwrap();

    let result = state
        .auth_service
        .login_user("admin@teste.com", "segredo123")
        .await;
    assert!(matches!(result, Err(AppError::InactiveUser)));

    // Senha errada continua respondendo credenciais inválidas
    let result = state
        .auth_service
        .login_user("admin@teste.com", "errada")
        .await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}
