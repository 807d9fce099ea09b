//! The built-in eDNE table set.
//!
//! Mirrors the layout of the Correios eDNE "Basico" distribution: one table
//! per delimited file, plus the update audit table. Registration order is
//! dependency-safe, so it can be fed to table creation as-is.

use super::{Column, ForeignKey, TableDescriptor, TableRegistry, AUDIT_TABLE};

impl TableRegistry {
    /// The registry of eDNE postal tables.
    pub fn dne() -> Self {
        let mut registry = Self::new();

        registry.register(
            TableDescriptor::new(
                "log_faixa_uf",
                vec![
                    Column::text("ufe_sg").required(),
                    Column::text("ufe_cep_ini").required(),
                    Column::text("ufe_cep_fim").required(),
                ],
            )
            .with_primary_key(&["ufe_sg"]),
        );

        registry.register(
            TableDescriptor::new(
                "log_localidade",
                vec![
                    Column::integer("loc_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::text("loc_no").required(),
                    Column::text("cep"),
                    Column::text("loc_in_sit").required(),
                    Column::text("loc_in_tipo_loc").required(),
                    Column::integer("loc_nu_sub"),
                    Column::text("loc_no_abrev"),
                    Column::integer("mun_nu"),
                ],
            )
            .with_primary_key(&["loc_nu"])
            .with_foreign_key(ForeignKey::new("ufe_sg", "log_faixa_uf", "ufe_sg"))
            .with_foreign_key(ForeignKey::new("loc_nu_sub", "log_localidade", "loc_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_var_loc",
                vec![
                    Column::integer("loc_nu").required(),
                    Column::integer("val_nu").required(),
                    Column::text("val_tx").required(),
                ],
            )
            .with_primary_key(&["loc_nu", "val_nu"])
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_bairro",
                vec![
                    Column::integer("bai_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::integer("loc_nu").required(),
                    Column::text("bai_no").required(),
                    Column::text("bai_no_abrev"),
                ],
            )
            .with_primary_key(&["bai_nu"])
            .with_foreign_key(ForeignKey::new("ufe_sg", "log_faixa_uf", "ufe_sg"))
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_var_bai",
                vec![
                    Column::integer("bai_nu").required(),
                    Column::integer("vdb_nu").required(),
                    Column::text("vdb_tx").required(),
                ],
            )
            .with_primary_key(&["bai_nu", "vdb_nu"])
            .with_foreign_key(ForeignKey::new("bai_nu", "log_bairro", "bai_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_cpc",
                vec![
                    Column::integer("cpc_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::integer("loc_nu").required(),
                    Column::text("cpc_no").required(),
                    Column::text("cpc_endereco").required(),
                    Column::text("cep").required(),
                ],
            )
            .with_primary_key(&["cpc_nu"])
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_logradouro",
                vec![
                    Column::integer("log_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::integer("loc_nu").required(),
                    Column::integer("bai_nu_ini").required(),
                    Column::integer("bai_nu_fim"),
                    Column::text("log_no").required(),
                    Column::text("log_complemento"),
                    Column::text("cep").required(),
                    Column::text("tlo_tx").required(),
                    Column::text("log_sta_tlo"),
                    Column::text("log_no_abrev"),
                ],
            )
            .with_primary_key(&["log_nu"])
            .with_foreign_key(ForeignKey::new("ufe_sg", "log_faixa_uf", "ufe_sg"))
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu"))
            .with_foreign_key(ForeignKey::new("bai_nu_ini", "log_bairro", "bai_nu"))
            .with_foreign_key(ForeignKey::new("bai_nu_fim", "log_bairro", "bai_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_var_log",
                vec![
                    Column::integer("log_nu").required(),
                    Column::integer("vlo_nu").required(),
                    Column::text("tlo_tx"),
                    Column::text("vlo_tx").required(),
                ],
            )
            .with_primary_key(&["log_nu", "vlo_nu"])
            .with_foreign_key(ForeignKey::new("log_nu", "log_logradouro", "log_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_num_sec",
                vec![
                    Column::integer("log_nu").required(),
                    Column::text("sec_nu_ini").required(),
                    Column::text("sec_nu_fim").required(),
                    Column::text("sec_in_lado").required(),
                ],
            )
            .with_foreign_key(ForeignKey::new("log_nu", "log_logradouro", "log_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_grande_usuario",
                vec![
                    Column::integer("gru_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::integer("loc_nu").required(),
                    Column::integer("bai_nu").required(),
                    Column::integer("log_nu"),
                    Column::text("gru_no").required(),
                    Column::text("gru_endereco").required(),
                    Column::text("cep").required(),
                    Column::text("gru_no_abrev"),
                ],
            )
            .with_primary_key(&["gru_nu"])
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu"))
            .with_foreign_key(ForeignKey::new("bai_nu", "log_bairro", "bai_nu"))
            .with_foreign_key(ForeignKey::new("log_nu", "log_logradouro", "log_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "log_unid_oper",
                vec![
                    Column::integer("uop_nu").required(),
                    Column::text("ufe_sg").required(),
                    Column::integer("loc_nu").required(),
                    Column::integer("bai_nu").required(),
                    Column::integer("log_nu"),
                    Column::text("uop_no").required(),
                    Column::text("uop_endereco").required(),
                    Column::text("cep").required(),
                    Column::text("uop_in_cp").required(),
                    Column::text("uop_no_abrev"),
                ],
            )
            .with_primary_key(&["uop_nu"])
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu"))
            .with_foreign_key(ForeignKey::new("bai_nu", "log_bairro", "bai_nu"))
            .with_foreign_key(ForeignKey::new("log_nu", "log_logradouro", "log_nu")),
        );

        registry.register(
            TableDescriptor::new(
                "ect_pais",
                vec![
                    Column::text("pai_sg").required(),
                    Column::text("pai_sg_alternativa"),
                    Column::text("pai_no_portugues").required(),
                    Column::text("pai_no_ingles"),
                    Column::text("pai_no_frances"),
                    Column::text("pai_abreviatura"),
                ],
            )
            .with_primary_key(&["pai_sg"]),
        );

        registry.register(TableDescriptor::new(
            AUDIT_TABLE,
            vec![
                Column::text("update_date").required(),
                Column::text("logs").required(),
            ],
        ));

        registry
    }
}
