use crate::models::DashboardResponse;
use crate::stats::format_usd;

pub fn render_index(dashboard: &DashboardResponse) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &dashboard.today.to_string())
        .replace("{{REVENUE}}", &format_usd(dashboard.monthly_revenue))
        .replace("{{ACTIVE}}", &dashboard.active_clients.to_string())
        .replace("{{UPCOMING}}", &dashboard.upcoming.len().to_string())
        .replace("{{OVERDUE}}", &dashboard.overdue.len().to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Client Billing Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #2d7a4b;
      --danger: #c63b2b;
      --warn: #b7791f;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.ok { color: var(--ok); }
    .stat .value.warn { color: var(--warn); }
    .stat .value.danger { color: var(--danger); }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .btn-small {
      padding: 6px 12px;
      font-size: 0.85rem;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-small.pay { background: rgba(45, 122, 75, 0.12); color: var(--ok); }
    .btn-small.delete { background: rgba(198, 59, 43, 0.1); color: var(--danger); }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow-x: auto;
    }

    .card.overdue {
      border-color: rgba(198, 59, 43, 0.3);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th {
      text-align: left;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
      padding: 8px 10px;
    }

    td {
      padding: 10px;
      border-top: 1px solid rgba(47, 72, 88, 0.08);
      white-space: nowrap;
    }

    .pill {
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.8rem;
      font-weight: 600;
      background: rgba(47, 72, 88, 0.08);
    }

    .pill.active { background: rgba(45, 122, 75, 0.12); color: var(--ok); }
    .pill.inactive { background: rgba(139, 133, 125, 0.15); color: #6b645d; }

    .empty {
      color: #8b857d;
      text-align: center;
      padding: 24px 0;
    }

    form.client-form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 14px;
    }

    form.client-form label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: #5f5c57;
    }

    form.client-form input,
    form.client-form select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .form-actions {
      display: flex;
      gap: 10px;
      align-items: end;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--ok);
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Client Billing</h1>
        <p class="subtitle">Billing cycles and payment tracking as of <span id="today">{{TODAY}}</span>.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="dashboard" role="tab" aria-selected="true">Dashboard</button>
        <button class="tab" type="button" data-view="clients" role="tab" aria-selected="false">All clients</button>
      </div>
      <button class="btn-primary" id="new-client" type="button">Add client</button>
    </header>

    <section class="card" id="form-card" hidden>
      <h2 id="form-title">Add new client</h2>
      <form class="client-form" id="client-form">
        <label>Client name
          <input name="name" type="text" required />
        </label>
        <label>Amount (USD)
          <input name="amount" type="number" min="0" step="0.01" required />
        </label>
        <label>Billing frequency
          <select name="frequency">
            <option value="monthly">Monthly</option>
            <option value="quarterly">Quarterly</option>
          </select>
        </label>
        <label>Billing day of month (1-31)
          <input name="billing_day" type="number" min="1" max="31" required />
        </label>
        <label>Project kickoff date
          <input name="project_kickoff_date" type="date" required />
        </label>
        <label>Status
          <select name="status">
            <option value="active">Active</option>
            <option value="inactive">Inactive</option>
          </select>
        </label>
        <div class="form-actions">
          <button class="btn-primary" id="form-submit" type="submit">Add client</button>
          <button class="btn-small" id="form-cancel" type="button">Cancel</button>
        </div>
      </form>
    </section>

    <p id="status" class="status" role="status"></p>

    <section id="view-dashboard">
      <div class="panel">
        <div class="stat">
          <span class="label">Monthly revenue</span>
          <span id="revenue" class="value">{{REVENUE}}</span>
        </div>
        <div class="stat">
          <span class="label">Active clients</span>
          <span id="active" class="value ok">{{ACTIVE}}</span>
        </div>
        <div class="stat">
          <span class="label">Due this week</span>
          <span id="upcoming-count" class="value warn">{{UPCOMING}}</span>
        </div>
        <div class="stat">
          <span class="label">Overdue</span>
          <span id="overdue-count" class="value danger">{{OVERDUE}}</span>
        </div>
      </div>

      <div class="card overdue" id="overdue-card" hidden>
        <h2>Overdue payments</h2>
        <table>
          <thead>
            <tr><th>Client</th><th>Amount</th><th>Due date</th><th>Days overdue</th><th>Actions</th></tr>
          </thead>
          <tbody id="overdue-rows"></tbody>
        </table>
      </div>

      <div class="card">
        <h2>Upcoming payments (next 7 days)</h2>
        <p class="empty" id="upcoming-empty">No payments due in the next 7 days</p>
        <table id="upcoming-table" hidden>
          <thead>
            <tr><th>Client</th><th>Amount</th><th>Due date</th><th>Days until</th><th>Frequency</th><th>Actions</th></tr>
          </thead>
          <tbody id="upcoming-rows"></tbody>
        </table>
      </div>
    </section>

    <section id="view-clients" hidden>
      <div class="card">
        <h2>All clients</h2>
        <table>
          <thead>
            <tr><th>Client</th><th>Amount</th><th>Frequency</th><th>Billing day</th><th>Last payment</th><th>Next payment</th><th>Status</th><th>Actions</th></tr>
          </thead>
          <tbody id="client-rows"></tbody>
        </table>
      </div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const formCard = document.getElementById('form-card');
    const form = document.getElementById('client-form');
    const formTitle = document.getElementById('form-title');
    const formSubmit = document.getElementById('form-submit');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let editingId = null;
    let clients = [];

    const money = new Intl.NumberFormat('en-US', { style: 'currency', currency: 'USD' });
    const formatDate = (value) =>
      new Date(value + 'T00:00:00').toLocaleDateString('en-US', { year: 'numeric', month: 'short', day: 'numeric' });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const cell = (text, className) => {
      const td = document.createElement('td');
      if (className) {
        const span = document.createElement('span');
        span.className = className;
        span.textContent = text;
        td.appendChild(span);
      } else {
        td.textContent = text;
      }
      return td;
    };

    const actionButton = (label, className, handler) => {
      const button = document.createElement('button');
      button.type = 'button';
      button.className = 'btn-small ' + className;
      button.textContent = label;
      button.addEventListener('click', () => handler().catch((err) => setStatus(err.message, 'error')));
      return button;
    };

    const actionsCell = (...buttons) => {
      const td = document.createElement('td');
      buttons.forEach((button) => td.appendChild(button));
      return td;
    };

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const markPaid = async (id) => {
      await request('POST', `/api/clients/${id}/paid`);
      setStatus('Payment recorded', 'ok');
      await refresh();
    };

    const removeClient = async (client) => {
      if (!window.confirm(`Delete ${client.name}?`)) {
        return;
      }
      await request('DELETE', `/api/clients/${client.id}`);
      setStatus('Client deleted', 'ok');
      await refresh();
    };

    const renderDashboard = (data) => {
      document.getElementById('today').textContent = data.today;
      document.getElementById('revenue').textContent = money.format(data.monthly_revenue);
      document.getElementById('active').textContent = data.active_clients;
      document.getElementById('upcoming-count').textContent = data.upcoming.length;
      document.getElementById('overdue-count').textContent = data.overdue.length;

      const overdueRows = document.getElementById('overdue-rows');
      overdueRows.replaceChildren(...data.overdue.map((row) => {
        const tr = document.createElement('tr');
        tr.append(
          cell(row.name),
          cell(money.format(row.amount)),
          cell(formatDate(row.next_payment_date)),
          cell(`${Math.abs(row.days_until)} days`),
          actionsCell(actionButton('Mark paid', 'pay', () => markPaid(row.id)))
        );
        return tr;
      }));
      document.getElementById('overdue-card').hidden = data.overdue.length === 0;

      const upcomingRows = document.getElementById('upcoming-rows');
      upcomingRows.replaceChildren(...data.upcoming.map((row) => {
        const tr = document.createElement('tr');
        tr.append(
          cell(row.name),
          cell(money.format(row.amount)),
          cell(formatDate(row.next_payment_date)),
          cell(`${row.days_until} days`),
          cell(row.frequency, 'pill'),
          actionsCell(actionButton('Mark paid', 'pay', () => markPaid(row.id)))
        );
        return tr;
      }));
      document.getElementById('upcoming-table').hidden = data.upcoming.length === 0;
      document.getElementById('upcoming-empty').hidden = data.upcoming.length !== 0;
    };

    const renderClients = () => {
      const rows = document.getElementById('client-rows');
      rows.replaceChildren(...clients.map((client) => {
        const tr = document.createElement('tr');
        tr.append(
          cell(client.name),
          cell(money.format(client.amount)),
          cell(client.frequency, 'pill'),
          cell(`Day ${client.billing_day}`),
          cell(formatDate(client.last_payment_date)),
          cell(formatDate(client.next_payment_date)),
          cell(client.status, 'pill ' + client.status),
          actionsCell(
            actionButton('Edit', '', async () => openForm(client)),
            actionButton('Delete', 'delete', () => removeClient(client))
          )
        );
        return tr;
      }));
    };

    const refresh = async () => {
      const [dashboard, list] = await Promise.all([
        request('GET', '/api/dashboard'),
        request('GET', '/api/clients')
      ]);
      clients = list;
      renderDashboard(dashboard);
      renderClients();
    };

    const openForm = (client) => {
      editingId = client ? client.id : null;
      form.reset();
      if (client) {
        form.elements.name.value = client.name;
        form.elements.amount.value = client.amount;
        form.elements.frequency.value = client.frequency;
        form.elements.billing_day.value = client.billing_day;
        form.elements.project_kickoff_date.value = client.project_kickoff_date;
        form.elements.status.value = client.status;
      }
      formTitle.textContent = client ? 'Edit client' : 'Add new client';
      formSubmit.textContent = client ? 'Update client' : 'Add client';
      formCard.hidden = false;
    };

    const closeForm = () => {
      editingId = null;
      form.reset();
      formCard.hidden = true;
    };

    const setView = (view) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.view === view;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      document.getElementById('view-dashboard').hidden = view !== 'dashboard';
      document.getElementById('view-clients').hidden = view !== 'clients';
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setView(button.dataset.view));
    });

    document.getElementById('new-client').addEventListener('click', () => openForm(null));
    document.getElementById('form-cancel').addEventListener('click', closeForm);

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = Object.fromEntries(new FormData(form).entries());
      const save = editingId === null
        ? request('POST', '/api/clients', payload)
        : request('PUT', `/api/clients/${editingId}`, payload);
      save
        .then(() => {
          setStatus(editingId === null ? 'Client added' : 'Client updated', 'ok');
          closeForm();
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
