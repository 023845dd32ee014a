//! Artifact templates.
//!
//! Plain text with `{{VARIABLE}}` placeholders, filled from a
//! [`RenderContext`](odoo_scaffold_core::domain::RenderContext). Anything that
//! depends on the lifecycle or on the visibility dialect is a placeholder
//! whose value is built in `fragments`.

pub const SECURITY_FILE: &str = "security/security.xml";
pub const ACCESS_FILE: &str = "security/ir.model.access.csv";
pub const MENU_FILE: &str = "views/menu.xml";

pub const MANIFEST: &str = r#"{
    'name': '{{HUMAN_NAME}}',
    'version': '{{VERSION}}',
    'category': '{{CATEGORY}}',
    'summary': '{{SUMMARY}}',
    'description': """
        {{HUMAN_NAME}}
        {{HUMAN_NAME_UNDERLINE}}
        TODO: Add module description
    """,
    'author': '{{AUTHOR}}',
    'website': '{{WEBSITE}}',
    'license': '{{LICENSE}}',
    'depends': [
{{DEPENDS}}
    ],
    'data': [
{{DATA_FILES}}
    ],
    'demo': [],
    'installable': True,
    'application': {{APPLICATION}},
    'auto_install': False,
}
"#;

pub const ROOT_INIT: &str = "from . import models\n";

pub const MODELS_INIT: &str = "from . import {{MODEL_MODULE}}\n";

pub const MODEL: &str = r#"from odoo import models, fields, api


class {{CLASS_NAME}}(models.Model):
    _name = '{{MODEL_NAME}}'
    _description = '{{HUMAN_NAME}}'
    _inherit = ['mail.thread', 'mail.activity.mixin']
    _order = 'name'

    name = fields.Char(string='Name', required=True, tracking=True)
    description = fields.Text(string='Description')
    active = fields.Boolean(default=True)
    state = fields.Selection([
{{STATE_SELECTION}}
    ], string='Status', default='{{INITIAL_STATE}}', required=True, tracking=True)
    company_id = fields.Many2one(
        'res.company', string='Company',
        default=lambda self: self.env.company,
    )

{{TRANSITION_METHODS}}
"#;

pub const SECURITY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <record id="{{USER_GROUP}}" model="res.groups">
        <field name="name">{{HUMAN_NAME}} User</field>
        <field name="category_id" ref="base.module_category_services"/>
        <field name="implied_ids" eval="[(4, ref('base.group_user'))]"/>
    </record>

    <record id="{{MANAGER_GROUP}}" model="res.groups">
        <field name="name">{{HUMAN_NAME}} Manager</field>
        <field name="category_id" ref="base.module_category_services"/>
        <field name="implied_ids" eval="[(4, ref('{{USER_GROUP}}'))]"/>
        <field name="users" eval="[(4, ref('base.user_root')), (4, ref('base.user_admin'))]"/>
    </record>
</odoo>
"#;

pub const ACCESS: &str = "id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink
{{USER_ACCESS}},{{MODEL_NAME}}.user,{{MODEL_REF}},{{USER_GROUP}},1,1,1,0
{{MANAGER_ACCESS}},{{MODEL_NAME}}.manager,{{MODEL_REF}},{{MANAGER_GROUP}},1,1,1,1
";

pub const VIEWS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <!-- Form View -->
    <record id="{{FORM_VIEW}}" model="ir.ui.view">
        <field name="name">{{MODEL_NAME}}.form</field>
        <field name="model">{{MODEL_NAME}}</field>
        <field name="arch" type="xml">
            <form string="{{HUMAN_NAME}}">
                <header>
{{HEADER_BUTTONS}}
                    <field name="state" widget="statusbar"
                           statusbar_visible="{{STATUSBAR_VISIBLE}}"/>
                </header>
                <sheet>
                    <div class="oe_title">
                        <label for="name"/>
                        <h1><field name="name" placeholder="Name"/></h1>
                    </div>
                    <group>
                        <group>
                            <field name="company_id"
                                   groups="base.group_multi_company"/>
                        </group>
                        <group>
                        </group>
                    </group>
                    <notebook>
                        <page string="Description" name="description">
                            <field name="description"/>
                        </page>
                    </notebook>
                </sheet>
                <div class="oe_chatter">
                    <field name="message_follower_ids"/>
                    <field name="activity_ids"/>
                    <field name="message_ids"/>
                </div>
            </form>
        </field>
    </record>

    <!-- Tree View -->
    <record id="{{TREE_VIEW}}" model="ir.ui.view">
        <field name="name">{{MODEL_NAME}}.tree</field>
        <field name="model">{{MODEL_NAME}}</field>
        <field name="arch" type="xml">
            <tree string="{{HUMAN_NAME}}" multi_edit="1">
                <field name="name"/>
                <field name="state" widget="badge"
                       decoration-success="state == 'done'"
                       decoration-info="state == 'confirmed'"
                       decoration-warning="state == 'draft'"/>
            </tree>
        </field>
    </record>

    <!-- Search View -->
    <record id="{{SEARCH_VIEW}}" model="ir.ui.view">
        <field name="name">{{MODEL_NAME}}.search</field>
        <field name="model">{{MODEL_NAME}}</field>
        <field name="arch" type="xml">
            <search string="Search {{HUMAN_NAME}}">
                <field name="name"/>
                <separator/>
{{STATE_FILTERS}}
                <separator/>
                <filter name="archived" string="Archived"
                        domain="[('active', '=', False)]"/>
                <group expand="0" string="Group By">
                    <filter name="group_by_state" string="Status"
                            context="{'group_by': 'state'}"/>
                </group>
            </search>
        </field>
    </record>

    <!-- Action -->
    <record id="{{ACTION}}" model="ir.actions.act_window">
        <field name="name">{{HUMAN_NAME}}</field>
        <field name="res_model">{{MODEL_NAME}}</field>
        <field name="view_mode">tree,form</field>
        <field name="search_view_id" ref="{{SEARCH_VIEW}}"/>
        <field name="help" type="html">
            <p class="o_view_nocontent_smiling_face">
                Create your first {{HUMAN_NAME_LOWER}} record!
            </p>
        </field>
    </record>
</odoo>
"#;

pub const MENU: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<odoo>
    <menuitem id="{{ROOT_MENU}}"
              name="{{HUMAN_NAME}}"
              web_icon="{{MODULE}},static/description/icon.png"
              sequence="100"/>

    <menuitem id="{{MAIN_MENU}}"
              name="{{HUMAN_NAME}}"
              parent="{{ROOT_MENU}}"
              sequence="10"/>

    <menuitem id="{{LIST_MENU}}"
              name="{{HUMAN_NAME}}"
              parent="{{MAIN_MENU}}"
              action="{{ACTION}}"
              sequence="10"/>
</odoo>
"#;
